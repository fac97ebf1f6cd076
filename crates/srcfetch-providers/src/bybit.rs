use anyhow::Context;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api2.bybit.com/spot/api/otc/item/list";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct P2pQuery {
    pub token_id: String,
    pub currency_id: String,
    pub side: TradeSide,
    pub size: u32,
    pub page: u32,
}

impl P2pQuery {
    pub fn new(
        token_id: impl Into<String>,
        currency_id: impl Into<String>,
        side: TradeSide,
    ) -> Self {
        Self {
            token_id: token_id.into(),
            currency_id: currency_id.into(),
            side,
            size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PayMethod {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct P2pOffer {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub token: String,
    #[serde(default, rename = "payMethods")]
    pub pay_methods: Vec<PayMethod>,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    ret_code: i64,
    #[serde(default)]
    ret_msg: Option<String>,
    #[serde(default)]
    result: Option<ListResult>,
}

#[derive(Debug, Deserialize)]
struct ListResult {
    #[serde(default)]
    items: Vec<P2pOffer>,
}

/// Client for the public Bybit OTC item-list endpoint.
pub struct BybitP2pClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl BybitP2pClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn opportunities(&self, query: &P2pQuery) -> anyhow::Result<Vec<P2pOffer>> {
        debug!(endpoint = %self.endpoint, side = %query.side, "querying P2P listing");
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("userId", ""),
                ("tokenId", query.token_id.as_str()),
                ("currencyId", query.currency_id.as_str()),
                ("side", query.side.as_str()),
            ])
            .query(&[("size", query.size), ("page", query.page)])
            .send()
            .context("send P2P listing request")?
            .error_for_status()
            .context("P2P listing status")?
            .text()
            .context("read P2P listing body")?;
        parse_listing(&body)
    }
}

impl Default for BybitP2pClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_listing(body: &str) -> anyhow::Result<Vec<P2pOffer>> {
    let envelope: ListEnvelope =
        serde_json::from_str(body).context("parse P2P listing response")?;
    if envelope.ret_code != 0 {
        let message = envelope
            .ret_msg
            .unwrap_or_else(|| format!("ret_code {}", envelope.ret_code));
        anyhow::bail!("P2P API error: {message}");
    }
    Ok(envelope.result.map(|result| result.items).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offers_from_envelope() {
        let body = r#"{
            "ret_code": 0,
            "ret_msg": "SUCCESS",
            "result": {
                "items": [
                    {
                        "nickname": "trader-one",
                        "price": "1.02",
                        "currency": "USD",
                        "quantity": "5000",
                        "token": "USDT",
                        "payMethods": [{"name": "Bank Transfer"}, {"name": "Wise"}]
                    }
                ]
            }
        }"#;
        let offers = parse_listing(body).unwrap();
        assert_eq!(offers.len(), 1);
        let offer = &offers[0];
        assert_eq!(offer.nickname, "trader-one");
        assert_eq!(offer.price, "1.02");
        assert_eq!(offer.pay_methods.len(), 2);
        assert_eq!(offer.pay_methods[1].name, "Wise");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let body = r#"{"ret_code": 0, "result": {"items": [{}]}}"#;
        let offers = parse_listing(body).unwrap();
        assert_eq!(offers[0].nickname, "");
        assert!(offers[0].pay_methods.is_empty());
    }

    #[test]
    fn nonzero_ret_code_is_an_error() {
        let body = r#"{"ret_code": 10001, "ret_msg": "params error"}"#;
        let err = parse_listing(body).unwrap_err();
        assert!(err.to_string().contains("params error"));
    }

    #[test]
    fn missing_result_yields_empty_list() {
        let body = r#"{"ret_code": 0}"#;
        assert!(parse_listing(body).unwrap().is_empty());
    }

    #[test]
    fn trade_side_uppercase_wire_values() {
        assert_eq!(TradeSide::Buy.as_str(), "BUY");
        assert_eq!(TradeSide::Sell.as_str(), "SELL");
    }

    #[test]
    fn query_defaults_to_first_page() {
        let query = P2pQuery::new("USDT", "USD", TradeSide::Sell);
        assert_eq!(query.size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.page, 1);
    }
}
