//! Source templates for the generated build-info module.

use serde_json::Value;

use super::Format;
use crate::constants::APP_NAME;
use crate::models::BuildInfo;

/// JSON string literal, which is also a valid JS/TS string literal.
fn string_literal(s: &str) -> String {
    Value::from(s).to_string()
}

/// Render the module source for `info`. Output depends only on its inputs.
pub fn render(info: &BuildInfo, format: Format) -> String {
    let version = string_literal(info.version.as_str());
    let date = string_literal(&info.date);
    let timestamp = info.timestamp;

    match format {
        Format::TypeScript => format!(
            r#"// Generated by {APP_NAME}. Do not edit by hand.

export const VERSION = {version};
export const BUILD_DATE = {date};
export const BUILD_TIMESTAMP = {timestamp};

export interface BuildInfo {{
  version: string;
  date: string;
  timestamp: number;
}}

export const BUILD_INFO: BuildInfo = {{
  version: VERSION,
  date: BUILD_DATE,
  timestamp: BUILD_TIMESTAMP,
}};

export function getFormattedBuildDate(): string {{
  return new Date(BUILD_TIMESTAMP).toLocaleString();
}}

export function getVersionDisplayString(): string {{
  return `v${{VERSION.split("-")[0]}}`;
}}
"#
        ),
        Format::JavaScript => format!(
            r#"// Generated by {APP_NAME}. Do not edit by hand.

export const VERSION = {version};
export const BUILD_DATE = {date};
export const BUILD_TIMESTAMP = {timestamp};

export const BUILD_INFO = Object.freeze({{
  version: VERSION,
  date: BUILD_DATE,
  timestamp: BUILD_TIMESTAMP,
}});

/** @returns {{string}} */
export function getFormattedBuildDate() {{
  return new Date(BUILD_TIMESTAMP).toLocaleString();
}}

/** @returns {{string}} */
export function getVersionDisplayString() {{
  return `v${{VERSION.split("-")[0]}}`;
}}
"#
        ),
    }
}
