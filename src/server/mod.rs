//! Listen/accept shell around the request pipeline.

pub mod listener;
