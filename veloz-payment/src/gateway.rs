use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Gateway-specific knobs. The success sentinel and amount scale are
/// observed properties of the gateway integration, not business rules, so
/// they live in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Code both the response and transaction-status fields must carry for a
    /// payment to count as succeeded.
    pub success_code: String,

    /// Gateway amounts arrive multiplied by this factor (VNPay sends VND
    /// x100); divided out before any comparison.
    pub amount_scale: i64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            success_code: "00".to_string(),
            amount_scale: 100,
        }
    }
}

/// Canonical shape of a gateway return callback, validated once at the
/// boundary so reconciliation never touches raw query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayCallback {
    pub response_code: String,
    pub transaction_status: String,
    /// Scaled amount exactly as the gateway sent it.
    pub amount_raw: i64,
    pub transaction_ref: String,
    pub transaction_no: Option<String>,
    pub bank_code: Option<String>,
    pub order_info: Option<String>,
    /// Raw 14-digit pay date (`YYYYMMDDHHmmss`), parsed lazily.
    pub pay_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error("missing gateway parameter: {0}")]
    MissingParam(&'static str),

    #[error("gateway amount is not numeric: {0}")]
    InvalidAmount(String),
}

impl GatewayCallback {
    /// Build from VNPay-style named query parameters.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, CallbackError> {
        let required = |key: &'static str| -> Result<String, CallbackError> {
            params
                .get(key)
                .cloned()
                .ok_or(CallbackError::MissingParam(key))
        };

        let amount_str = required("vnp_Amount")?;
        let amount_raw = amount_str
            .parse::<i64>()
            .map_err(|_| CallbackError::InvalidAmount(amount_str.clone()))?;

        Ok(Self {
            response_code: required("vnp_ResponseCode")?,
            transaction_status: required("vnp_TransactionStatus")?,
            amount_raw,
            transaction_ref: required("vnp_TxnRef")?,
            transaction_no: params.get("vnp_TransactionNo").cloned(),
            bank_code: params.get("vnp_BankCode").cloned(),
            order_info: params.get("vnp_OrderInfo").cloned(),
            pay_date: params.get("vnp_PayDate").cloned(),
        })
    }

    /// Parsed pay date, or `None` when absent or malformed.
    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.pay_date.as_deref().and_then(parse_pay_date)
    }
}

/// Parse the gateway's fixed 14-digit timestamp.
///
/// Malformed input (wrong length, non-digits, impossible dates) yields
/// `None`; a bad timestamp never fails the whole reconciliation.
pub fn parse_pay_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.len() != 14 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y%m%d%H%M%S")
        .ok()
        .map(|naive| naive.and_utc())
}
