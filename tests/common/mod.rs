//! Shared test support: mock data builders and a scripted gateway.

#![allow(dead_code)]

pub mod mock_data;
pub mod mock_gateway;
