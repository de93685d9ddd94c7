// Configured default rates flowing into invoice and quote constructors

use autobilling::config::{BillingConfig, TaxDefaults};
use autobilling::core::telemetry::init_tracing;
use autobilling::{BillingError, CarWashInvoice, CostType, Invoice, SalesQuote, ServiceInvoice};
use rust_decimal_macros::dec;

fn config_with(pairs: &'static [(&'static str, &'static str)]) -> BillingConfig {
    BillingConfig::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
    .unwrap()
}

#[test]
fn test_default_rates_reach_invoices() {
    let config = config_with(&[]);
    assert!(config.validate().is_ok());

    let mut service = ServiceInvoice::from_config(&config.taxes);
    service.add_cost(CostType::Part, dec!(100)).unwrap();
    assert_eq!(service.provincial_sales_tax_rate(), dec!(0.07));
    assert_eq!(service.total(), dec!(112));

    let car_wash = CarWashInvoice::from_config(&config.taxes);
    assert_eq!(car_wash.goods_and_services_tax_rate(), dec!(0.05));
    assert_eq!(car_wash.subtotal(), dec!(0));
}

#[test]
fn test_configured_sales_tax_reaches_quotes() {
    let config = config_with(&[("DEFAULT_SALES_TAX_RATE", "0.15")]);

    let quote = SalesQuote::from_config(dec!(10000), dec!(2500), &config.taxes).unwrap();
    assert_eq!(quote.sales_tax_rate(), dec!(0.15));
    assert_eq!(quote.total().unwrap(), dec!(11500));
    assert_eq!(quote.amount_due().unwrap(), dec!(9000));

    assert!(SalesQuote::from_config(dec!(0), dec!(0), &TaxDefaults::default()).is_err());
}

#[test]
fn test_tracing_installs_once() {
    let config = config_with(&[("LOG_LEVEL", "debug")]);

    // No other test in this binary installs a subscriber
    assert!(init_tracing(&config.app).is_ok());
    let err = init_tracing(&config.app).unwrap_err();
    assert!(matches!(err, BillingError::Configuration(_)));

    // Mutations log at debug level without affecting results
    let mut service = ServiceInvoice::from_config(&config.taxes);
    service.add_cost(CostType::Labour, dec!(40)).unwrap();
    assert_eq!(service.labour_cost(), dec!(40));
}
