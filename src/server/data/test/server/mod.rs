use crate::server::data::server::ServerRepository;
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_verified_paginated;
mod touch_updated_at;
