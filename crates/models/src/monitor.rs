use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// A single HTTP header attached to every check request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestHeader {
    /// Server-assigned identifier of the header record.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

/// Attributes of an uptime monitor.
///
/// Optional attributes follow omit-when-unset semantics on the wire, and
/// fields absent from a response decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitor {
    /// Server-assigned identifier. Must stay empty when creating a monitor;
    /// populated from the envelope after any read or write.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Team that should own the resource when using a global API token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_name: String,
    /// Check kind: `status`, `expected_status_code`, `keyword`,
    /// `keyword_absence`, `ping`, `tcp`, `udp`, `smtp`, `pop`, `imap`,
    /// `dns`, or `playwright`.
    pub monitor_type: String,
    /// The URL of the website or the host to check.
    pub url: String,
    /// Human-readable name of the monitor.
    pub pronounceable_name: String,
    /// Send email alerts.
    pub email: bool,
    /// Send SMS alerts.
    pub sms: bool,
    /// Phone call alerts.
    pub call: bool,
    /// Push notification to the on-call person.
    pub push: bool,
    /// Check frequency in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_frequency: Option<u32>,
    /// Request headers sent with every check.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub request_headers: Vec<RequestHeader>,
    /// Status codes considered successful when `monitor_type` is
    /// `expected_status_code`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expected_status_codes: Vec<u16>,
    /// Days before domain expiry to alert at. Valid values are 1, 2, 3, 7,
    /// 14, 30, and 60.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_expiration: Option<u32>,
    /// Days before SSL certificate expiry to alert at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_expiration: Option<u32>,
    /// Escalation policy for the monitor.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub policy_id: String,
    /// Follow redirects when sending the HTTP request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    /// Keyword to require when `monitor_type` is `keyword` or `udp`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub required_keyword: String,
    /// Seconds to wait before escalating the incident to the whole team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_wait: Option<u32>,
    /// Pause monitoring without deleting the monitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    /// Port to probe for `tcp`, `udp`, `smtp`, `pop`, and `imap` checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Check regions, any subset of `us`, `eu`, `as`, `au`.
    pub regions: Vec<String>,
    /// Monitor group this monitor belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_group_id: Option<i64>,
    /// Seconds the monitor must be up to auto-resolve an incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_period: Option<u32>,
    /// Verify SSL certificate validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_ssl: Option<bool>,
    /// Seconds to wait after a failure before opening an incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_period: Option<u32>,
    /// HTTP method used for the check: GET, HEAD, POST, PUT, or PATCH.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub http_method: String,
    /// Seconds before the check request times out. For `playwright`
    /// monitors this is the scenario timeout instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u32>,
    /// Request body for POST/PUT/PATCH checks; the domain to query for
    /// `dns` checks.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_method: String,
    /// Basic auth username included with the check request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_username: String,
    /// Basic auth password included with the check request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_password: String,
    /// Maintenance days, any subset of `mon` through `sun`. Overnight
    /// windows need both affected days set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maintenance_days: Vec<String>,
    /// Daily maintenance window start, e.g. `01:00:00`. Checks are not
    /// performed inside the window.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub maintenance_from: String,
    /// Daily maintenance window end.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub maintenance_to: String,
    /// Timezone of the maintenance window. Defaults to UTC server-side.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub maintenance_timezone: String,
    /// Keep cookies across redirects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_cookies: Option<bool>,
    /// JavaScript source of the scenario for `playwright` monitors.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub playwright_script: String,
    /// Scenario name identifying a `playwright` monitor in the UI.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scenario_name: String,
    /// Current operational state. Server-assigned.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl Resource for Monitor {
    const COLLECTION: &'static str = "monitors";
    const KIND: &'static str = "monitor";

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_omits_server_assigned_fields() {
        let monitor = Monitor {
            monitor_type: "status".to_owned(),
            url: "https://example.com".to_owned(),
            pronounceable_name: "Example homepage".to_owned(),
            email: true,
            ..Default::default()
        };

        let value = serde_json::to_value(&monitor).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("check_frequency"));
        // Required-on-wire fields serialize even when zero-valued.
        assert_eq!(object["regions"], serde_json::json!([]));
        assert_eq!(object["sms"], serde_json::json!(false));
    }

    #[test]
    fn absent_fields_decode_to_zero_values() {
        let monitor: Monitor = serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert_eq!(monitor.url, "https://example.com");
        assert!(monitor.id.is_empty());
        assert!(monitor.request_headers.is_empty());
        assert_eq!(monitor.paused, None);
    }

    #[test]
    fn request_headers_round_trip() {
        let monitor = Monitor {
            url: "https://example.com".to_owned(),
            request_headers: vec![RequestHeader {
                id: String::new(),
                name: "X-Probe".to_owned(),
                value: "uptime".to_owned(),
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&monitor).unwrap();
        assert_eq!(value["request_headers"][0]["name"], "X-Probe");
        let decoded: Monitor = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.request_headers, monitor.request_headers);
    }
}
