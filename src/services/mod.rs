// Service module exports

pub mod countdown;
pub mod notification;
