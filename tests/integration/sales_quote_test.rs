// Sales quote workflow
//
// A salesperson prices a vehicle, swaps options while the customer decides,
// and hands the summary to whatever renders the quote.

use autobilling::{Accessories, BillingError, ExteriorFinish, SalesQuote};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn reference_quote() -> SalesQuote {
    SalesQuote::with_options(
        dec!(20000),
        dec!(5000),
        dec!(0.05),
        Accessories::StereoSystem,
        ExteriorFinish::Standard,
    )
    .unwrap()
}

#[test]
fn test_reference_quote_chain() {
    let summary = reference_quote().summary().unwrap();

    assert_eq!(summary.accessories_cost, dec!(505.05));
    assert_eq!(summary.exterior_finish_cost, dec!(202.02));
    assert_eq!(summary.subtotal, dec!(20707.07));
    assert_eq!(summary.sales_tax, dec!(1035.35));
    assert_eq!(summary.total, dec!(21742.42));
    assert_eq!(summary.amount_due, dec!(16742.42));
}

#[test]
fn test_every_priced_option_combination() {
    let mut quote = SalesQuote::new(dec!(30000), dec!(0), dec!(0)).unwrap();

    for accessories in Accessories::ALL_TAGS {
        for finish in ExteriorFinish::ALL_TAGS {
            quote.set_accessories_chosen(accessories);
            quote.set_exterior_finish_chosen(finish);

            match accessories.table_price() {
                Some(price) => {
                    assert_eq!(
                        quote.subtotal().unwrap(),
                        dec!(30000) + price + finish.price()
                    );
                    assert_eq!(quote.total().unwrap(), quote.subtotal().unwrap());
                }
                None => {
                    assert_eq!(accessories, Accessories::All);
                    assert!(quote.subtotal().is_err());
                }
            }
        }
    }
}

#[test]
fn test_all_accessories_lookup_is_a_defined_error() {
    let quote = SalesQuote::with_options(
        dec!(25000),
        dec!(0),
        dec!(0.13),
        "All".parse().unwrap(),
        ExteriorFinish::Pearlized,
    )
    .unwrap();

    let err = quote.accessories_cost().unwrap_err();
    assert_eq!(
        err,
        BillingError::InvalidCategory {
            field: "accessories_chosen",
            value: "all".to_string(),
        }
    );
    assert_eq!(quote.total().unwrap_err(), err);
}

#[test]
fn test_option_codes_from_upstream() {
    let accessories = Accessories::try_from(6).unwrap();
    let finish = ExteriorFinish::try_from(3).unwrap();
    let quote = SalesQuote::with_options(dec!(18000), dec!(0), dec!(0.05), accessories, finish).unwrap();

    // 18000 + 2525.25 + 606.06
    assert_eq!(quote.subtotal().unwrap(), dec!(21131.31));
    // 1056.5655 -> 1056.57
    assert_eq!(quote.sales_tax().unwrap(), dec!(1056.57));
    assert_eq!(quote.total().unwrap(), dec!(22187.88));

    assert!(Accessories::try_from(8).unwrap_err().is_invalid_category());
    assert!(ExteriorFinish::try_from(-1).unwrap_err().is_invalid_category());
}

#[test]
fn test_changes_are_reflected_on_next_read() {
    let mut quote = reference_quote();
    assert_eq!(quote.amount_due().unwrap(), dec!(16742.42));

    quote.set_trade_in_amount(dec!(6000)).unwrap();
    assert_eq!(quote.amount_due().unwrap(), dec!(15742.42));

    quote.set_vehicle_sale_price(dec!(21000)).unwrap();
    quote.set_sales_tax_rate(dec!(0)).unwrap();
    assert_eq!(quote.total().unwrap(), dec!(21707.07));
}

#[test]
fn test_out_of_range_values_leave_no_trace() {
    let mut quote = reference_quote();
    let before = quote.clone();

    assert!(quote.set_vehicle_sale_price(Decimal::ZERO).unwrap_err().is_out_of_range());
    assert!(quote.set_trade_in_amount(dec!(-100)).unwrap_err().is_out_of_range());
    assert!(quote.set_sales_tax_rate(dec!(-0.05)).unwrap_err().is_out_of_range());

    assert_eq!(quote, before);
    assert!(SalesQuote::new(dec!(0), dec!(0), dec!(0.05)).is_err());
}

#[test]
fn test_summary_serializes() {
    let summary = reference_quote().summary().unwrap();
    let json = serde_json::to_value(summary).unwrap();

    assert_eq!(json["subtotal"], "20707.07");
    assert_eq!(json["amount_due"], "16742.42");
}
