mod employee;

pub use employee::{Employee, JobYears, Link, Links};
