// Service invoice workflow
//
// A shop builds up a service invoice one charge at a time, with cost
// categories arriving as text or numeric codes from an upstream system.

use autobilling::{BillingError, CostType, Invoice, ServiceInvoice};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_invoice_built_from_tagged_charges() {
    let mut invoice = ServiceInvoice::new(dec!(0.07), dec!(0.05)).unwrap();

    let charges = [
        ("labour", dec!(85.00)),
        ("part", dec!(42.99)),
        ("material", dec!(7.50)),
        ("Labour", dec!(42.50)),
    ];
    for (tag, amount) in charges {
        let cost_type: CostType = tag.parse().unwrap();
        invoice.add_cost(cost_type, amount).unwrap();
    }

    assert_eq!(invoice.labour_cost(), dec!(127.50));
    assert_eq!(invoice.parts_cost(), dec!(42.99));
    assert_eq!(invoice.material_cost(), dec!(7.50));
    assert_eq!(invoice.subtotal(), dec!(177.99));

    // (42.99 + 7.50) * 0.07
    assert_eq!(invoice.provincial_sales_tax_charged(), dec!(3.5343));
    // 177.99 * 0.05
    assert_eq!(invoice.goods_and_services_tax_charged(), dec!(8.8995));
    // 190.4238 -> 190
    assert_eq!(invoice.total(), dec!(190));
}

#[test]
fn test_unknown_category_never_reaches_invoice() {
    let mut invoice = ServiceInvoice::new(dec!(0.07), dec!(0.05)).unwrap();

    let err = "Towing".parse::<CostType>().unwrap_err();
    assert!(matches!(err, BillingError::InvalidCategory { field: "cost_type", .. }));

    let err = CostType::try_from(5).unwrap_err();
    assert!(err.is_invalid_category());

    invoice.add_cost(CostType::try_from(2).unwrap(), dec!(10)).unwrap();
    assert_eq!(invoice.parts_cost(), dec!(10));
    assert_eq!(invoice.subtotal(), dec!(10));
}

#[test]
fn test_rejected_charge_leaves_totals_untouched() {
    let mut invoice = ServiceInvoice::new(dec!(0.07), dec!(0.05)).unwrap();
    invoice.add_cost(CostType::Labour, dec!(60)).unwrap();
    let before = invoice.summary();

    assert!(invoice.add_cost(CostType::Labour, Decimal::ZERO).unwrap_err().is_out_of_range());
    assert!(invoice.add_cost(CostType::Material, dec!(-12)).is_err());
    assert!(invoice.set_provincial_sales_tax_rate(dec!(1.5)).is_err());

    assert_eq!(invoice.summary(), before);
}

#[test]
fn test_rate_change_applies_to_accumulated_costs() {
    let mut invoice = ServiceInvoice::new(dec!(0.07), dec!(0.05)).unwrap();
    invoice.add_cost(CostType::Part, dec!(100)).unwrap();
    assert_eq!(invoice.provincial_sales_tax_charged(), dec!(7));

    invoice.set_provincial_sales_tax_rate(dec!(0.08)).unwrap();
    assert_eq!(invoice.provincial_sales_tax_charged(), dec!(8));
    assert_eq!(invoice.total(), dec!(113));
}

#[test]
fn test_invoices_usable_through_trait_objects() {
    let mut service = ServiceInvoice::new(dec!(0.1), dec!(0.05)).unwrap();
    service.add_cost(CostType::Labour, dec!(100)).unwrap();
    service.add_cost(CostType::Part, dec!(50)).unwrap();
    service.add_cost(CostType::Material, dec!(50)).unwrap();

    let car_wash =
        autobilling::CarWashInvoice::with_costs(dec!(0.1), dec!(0.05), dec!(20), dec!(5)).unwrap();

    let invoices: Vec<Box<dyn Invoice>> = vec![Box::new(service), Box::new(car_wash)];
    let pst: Vec<Decimal> = invoices
        .iter()
        .map(|invoice| invoice.provincial_sales_tax_charged())
        .collect();

    assert_eq!(pst, vec![dec!(10.00), Decimal::ZERO]);
    assert_eq!(invoices[1].total(), dec!(26.25));
}

#[test]
fn test_oversized_charges_are_rejected_without_panicking() {
    let mut invoice = ServiceInvoice::new(dec!(0.07), dec!(0.05)).unwrap();
    invoice.add_cost(CostType::Material, dec!(10)).unwrap();
    let before = invoice.summary();

    for _ in 0..2 {
        let err = invoice.add_cost(CostType::Part, Decimal::MAX).unwrap_err();
        assert!(err.is_out_of_range());
    }

    assert_eq!(invoice.summary(), before);
    assert_eq!(invoice.total(), dec!(11));
}
