//! Core data models for the analytics service.
//!
//! This module contains the employee row/record types, the derived labels,
//! dataset snapshots and the result types of every aggregate view.

mod analytics_result;
mod dataset;
mod derived;
mod employee;

pub use analytics_result::{
    AnalyticsReport, EligibleEmployee, PerformanceAnalytics, PromotionAnalytics, SalaryAnalytics,
    SalaryRanges, SummaryAnalytics, TopPerformer,
};
pub use dataset::{Dataset, DatasetSource};
pub use derived::{PerformanceLevel, PromotionEligibility};
pub use employee::{EmployeeRecord, EmployeeRow};
