// ═══════════════════════════════════════════════════════════════════
// Model Tests — wire-format decoding of backend and market responses
// ═══════════════════════════════════════════════════════════════════

use crypto_sim_core::models::auth::{LoginResponse, MessageResponse};
use crypto_sim_core::models::market::{MarketAsset, PricesResponse};
use crypto_sim_core::models::portfolio::{PortfolioResponse, Position};
use crypto_sim_core::models::wallet::BalanceResponse;

mod positions {
    use super::*;

    #[test]
    fn decodes_camel_case_wire_names() {
        let json = r#"{
            "cryptoId": "bitcoin",
            "cryptoName": "Bitcoin",
            "cryptoSymbol": "btc",
            "cryptoBroughtQuantity": 0.005,
            "cryptoBroughtMarketPrice": 40000.0,
            "amountInvested": 200.0,
            "currentValue": 250.0,
            "profitLoss": 50.0,
            "orderId": 17
        }"#;
        let p: Position = serde_json::from_str(json).expect("decode");
        assert_eq!(p.crypto_id, "bitcoin");
        assert_eq!(p.crypto_symbol.as_deref(), Some("btc"));
        assert_eq!(p.crypto_brought_quantity, 0.005);
        assert_eq!(p.amount_invested, 200.0);
        assert_eq!(p.profit_loss, 50.0);
        assert_eq!(p.order_id, Some(17));
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let p: Position = serde_json::from_str(r#"{"cryptoId": "bitcoin"}"#).expect("decode");
        assert_eq!(p.crypto_id, "bitcoin");
        assert_eq!(p.amount_invested, 0.0);
        assert_eq!(p.crypto_symbol, None);
        assert_eq!(p.order_id, None);
    }

    #[test]
    fn portfolio_response_defaults_to_empty_list() {
        let r: PortfolioResponse = serde_json::from_str("{}").expect("decode");
        assert!(r.portfolios.is_empty());

        let r: PortfolioResponse =
            serde_json::from_str(r#"{"portfolios": [{"cryptoId": "eth"}]}"#).expect("decode");
        assert_eq!(r.portfolios.len(), 1);
    }
}

mod wallet {
    use super::*;

    #[test]
    fn balance_is_three_state() {
        let r: BalanceResponse = serde_json::from_str(r#"{"balance": 120.5}"#).expect("decode");
        assert_eq!(r.balance, Some(120.5));

        let r: BalanceResponse = serde_json::from_str(r#"{"balance": null}"#).expect("decode");
        assert_eq!(r.balance, None);

        let r: BalanceResponse = serde_json::from_str("{}").expect("decode");
        assert_eq!(r.balance, None);
    }
}

mod market {
    use super::*;

    #[test]
    fn snake_case_fields_decode() {
        let json = r#"{
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "btc",
            "current_price": 65000.0,
            "price_change_percentage_24h": -1.2,
            "market_cap": 1.2e12,
            "market_cap_rank": 1
        }"#;
        let a: MarketAsset = serde_json::from_str(json).expect("decode");
        assert_eq!(a.current_price, Some(65000.0));
        assert_eq!(a.price_change_percentage_24h, Some(-1.2));
        assert_eq!(a.market_cap_rank, Some(1));
    }

    #[test]
    fn camel_case_backend_dto_fields_also_decode() {
        let json = r#"{
            "id": "bitcoin",
            "currentPrice": 65000.0,
            "priceChangePercentage24h": 2.5,
            "marketCap": 1.0,
            "totalVolume": 2.0
        }"#;
        let a: MarketAsset = serde_json::from_str(json).expect("decode");
        assert_eq!(a.current_price, Some(65000.0));
        assert_eq!(a.price_change_percentage_24h, Some(2.5));
        assert_eq!(a.total_volume, Some(2.0));
    }

    #[test]
    fn absent_numeric_fields_degrade_to_none() {
        let a: MarketAsset = serde_json::from_str(r#"{"id": "bitcoin"}"#).expect("decode");
        assert_eq!(a.current_price, None);
        assert_eq!(a.market_cap, None);
        assert_eq!(a.circulating_supply, None);
    }

    #[test]
    fn prices_response_accepts_bare_array() {
        let r: PricesResponse =
            serde_json::from_str(r#"[{"id": "bitcoin"}, {"id": "ethereum"}]"#).expect("decode");
        assert_eq!(r.into_assets().len(), 2);
    }

    #[test]
    fn prices_response_accepts_wrapped_object() {
        let r: PricesResponse =
            serde_json::from_str(r#"{"cryptoTableDTOS": [{"id": "bitcoin"}]}"#).expect("decode");
        assert_eq!(r.into_assets().len(), 1);
    }
}

mod auth {
    use super::*;

    #[test]
    fn login_response_carries_token() {
        let r: LoginResponse =
            serde_json::from_str(r#"{"token": "jwt-abc", "message": "ok"}"#).expect("decode");
        assert_eq!(r.token, "jwt-abc");
        assert_eq!(r.message.as_deref(), Some("ok"));
    }

    #[test]
    fn message_response_tolerates_missing_message() {
        let r: MessageResponse = serde_json::from_str("{}").expect("decode");
        assert_eq!(r.message, None);
    }
}
