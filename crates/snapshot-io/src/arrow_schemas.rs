//! Arrow schemas of the raw snapshot exports, as published upstream.

use arrow::datatypes::{DataType, Field, Schema};

pub fn pull_request_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("number", DataType::Int64, true),
        Field::new("title", DataType::Utf8, true),
        Field::new("body", DataType::Utf8, true),
        Field::new("agent", DataType::Utf8, false),
        Field::new("user", DataType::Utf8, true),
        Field::new("state", DataType::Utf8, true),
        Field::new("repo_id", DataType::Int64, true),
        Field::new("repo_url", DataType::Utf8, true),
        Field::new("html_url", DataType::Utf8, true),
    ])
}

pub fn repository_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("url", DataType::Utf8, false),
        Field::new("license", DataType::Utf8, true),
        Field::new("full_name", DataType::Utf8, true),
        Field::new("language", DataType::Utf8, true),
        Field::new("forks", DataType::Int64, true),
        Field::new("stars", DataType::Int64, true),
    ])
}

pub fn task_type_schema() -> Schema {
    Schema::new(vec![
        Field::new("agent", DataType::Utf8, true),
        Field::new("id", DataType::Int64, false),
        Field::new("title", DataType::Utf8, true),
        Field::new("reason", DataType::Utf8, true),
        Field::new("type", DataType::Utf8, true),
        Field::new("confidence", DataType::Float64, true),
    ])
}

pub fn commit_details_schema() -> Schema {
    Schema::new(vec![
        Field::new("sha", DataType::Utf8, false),
        Field::new("pr_id", DataType::Int64, false),
        Field::new("author", DataType::Utf8, true),
        Field::new("committer", DataType::Utf8, true),
        Field::new("message", DataType::Utf8, true),
        Field::new("commit_stats_total", DataType::Int64, true),
        Field::new("filename", DataType::Utf8, true),
        Field::new("status", DataType::Utf8, true),
        Field::new("additions", DataType::Int64, true),
        Field::new("deletions", DataType::Int64, true),
        Field::new("changes", DataType::Int64, true),
        Field::new("patch", DataType::Utf8, true),
    ])
}
