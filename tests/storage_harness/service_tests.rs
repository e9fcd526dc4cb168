//! Macro-generated test suite for the storage service contract.
//!
//! The `service_contract_tests!` macro validates any store implementing both
//! `CompanyService` and `InvoiceService` against the contract the handlers
//! rely on: ordering, `None` for missing rows, joins, referential integrity
//! and the delete cascade.
//!
//! # Generated Tests
//!
//! ## Companies
//! - `test_company_list_empty` — empty store lists nothing
//! - `test_company_create_and_get` — created row is returned by `get`
//! - `test_company_list_ordered_by_code`
//! - `test_company_update_partial` — absent fields keep stored values
//! - `test_company_update_missing` — unknown code returns `None`
//! - `test_company_delete` — `true` once, then `false`
//! - `test_company_duplicate_code_fails`
//!
//! ## Invoices
//! - `test_invoice_create_defaults` — `paid` false, `paid_date` null
//! - `test_invoice_unknown_company_fails` — foreign key enforced
//! - `test_company_invoices_join` — only matching invoices, ordered by id
//! - `test_invoice_company_join`
//! - `test_invoice_pay_and_unpay` — `paid_date` follows payment status
//! - `test_invoice_update_missing` / `test_invoice_delete`
//! - `test_company_delete_cascades`

/// Generate the storage contract suite.
///
/// `$factory` must evaluate to a fresh, empty store. It is re-evaluated for
/// each test.
#[macro_export]
macro_rules! service_contract_tests {
    ($factory:expr) => {
        mod service_contract_tests {
            use super::*;
            use biztime::prelude::*;

            // ==================================================================
            // Companies
            // ==================================================================

            #[tokio::test]
            async fn test_company_list_empty() {
                let store = $factory;
                assert!(CompanyService::list(&store).await.unwrap().is_empty());
                assert!(InvoiceService::list(&store).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_company_create_and_get() {
                let store = $factory;
                let created = CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();
                assert_eq!(created.code, "ibm");
                assert_eq!(created.description.as_deref(), Some("IBM description"));

                let fetched = CompanyService::get(&store, "ibm").await.unwrap();
                assert_eq!(fetched, Some(created));
                assert!(CompanyService::get(&store, "nope").await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_company_list_ordered_by_code() {
                let store = $factory;
                for (code, name) in [("ibm", "IBM"), ("apple", "Apple"), ("dell", "Dell")] {
                    CompanyService::create(&store, new_company(code, name))
                        .await
                        .unwrap();
                }

                let codes: Vec<String> = CompanyService::list(&store)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|c| c.code)
                    .collect();
                assert_eq!(codes, vec!["apple", "dell", "ibm"]);
            }

            #[tokio::test]
            async fn test_company_update_partial() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();

                let updated = CompanyService::update(
                    &store,
                    "ibm",
                    CompanyChanges {
                        name: Some("Big Blue".to_string()),
                        description: None,
                    },
                )
                .await
                .unwrap()
                .unwrap();

                assert_eq!(updated.name, "Big Blue");
                assert_eq!(updated.description.as_deref(), Some("IBM description"));
            }

            #[tokio::test]
            async fn test_company_update_missing() {
                let store = $factory;
                let result = CompanyService::update(&store, "nope", CompanyChanges::default())
                    .await
                    .unwrap();
                assert!(result.is_none());
            }

            #[tokio::test]
            async fn test_company_delete() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();

                assert!(CompanyService::delete(&store, "ibm").await.unwrap());
                assert!(!CompanyService::delete(&store, "ibm").await.unwrap());
                assert!(CompanyService::get(&store, "ibm").await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_company_duplicate_code_fails() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();
                assert!(
                    CompanyService::create(&store, new_company("ibm", "Other"))
                        .await
                        .is_err()
                );
            }

            // ==================================================================
            // Invoices
            // ==================================================================

            #[tokio::test]
            async fn test_invoice_create_defaults() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();

                let invoice = InvoiceService::create(&store, new_invoice("ibm", 100.0))
                    .await
                    .unwrap();
                assert_eq!(invoice.comp_code, "ibm");
                assert_eq!(invoice.amt, 100.0);
                assert!(!invoice.paid);
                assert!(invoice.paid_date.is_none());

                let fetched = InvoiceService::get(&store, invoice.id).await.unwrap();
                assert_eq!(fetched, Some(invoice));
            }

            #[tokio::test]
            async fn test_invoice_unknown_company_fails() {
                let store = $factory;
                let result = InvoiceService::create(&store, new_invoice("nope", 10.0)).await;
                assert!(result.is_err());
                assert!(InvoiceService::list(&store).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_company_invoices_join() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();
                CompanyService::create(&store, new_company("apple", "Apple"))
                    .await
                    .unwrap();
                let first = InvoiceService::create(&store, new_invoice("ibm", 100.0))
                    .await
                    .unwrap();
                InvoiceService::create(&store, new_invoice("apple", 5.0))
                    .await
                    .unwrap();
                let second = InvoiceService::create(&store, new_invoice("ibm", 200.0))
                    .await
                    .unwrap();

                let ids: Vec<i32> = CompanyService::invoices(&store, "ibm")
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|i| i.id)
                    .collect();
                assert_eq!(ids, vec![first.id, second.id]);
                assert!(CompanyService::invoices(&store, "nope").await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_invoice_company_join() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();
                let invoice = InvoiceService::create(&store, new_invoice("ibm", 100.0))
                    .await
                    .unwrap();

                let company = InvoiceService::company(&store, invoice.id)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(company.code, "ibm");
                assert_eq!(company.name, "IBM");
                assert!(
                    InvoiceService::company(&store, invoice.id + 1000)
                        .await
                        .unwrap()
                        .is_none()
                );
            }

            #[tokio::test]
            async fn test_invoice_pay_and_unpay() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();
                let invoice = InvoiceService::create(&store, new_invoice("ibm", 100.0))
                    .await
                    .unwrap();

                let paid = InvoiceService::update(
                    &store,
                    invoice.id,
                    InvoiceChanges {
                        amt: None,
                        paid: Some(true),
                    },
                )
                .await
                .unwrap()
                .unwrap();
                assert!(paid.paid);
                assert!(paid.paid_date.is_some());
                assert_eq!(paid.amt, 100.0);

                let repaid = InvoiceService::update(
                    &store,
                    invoice.id,
                    InvoiceChanges {
                        amt: Some(150.0),
                        paid: Some(true),
                    },
                )
                .await
                .unwrap()
                .unwrap();
                assert_eq!(repaid.paid_date, paid.paid_date);
                assert_eq!(repaid.amt, 150.0);

                let unpaid = InvoiceService::update(
                    &store,
                    invoice.id,
                    InvoiceChanges {
                        amt: None,
                        paid: Some(false),
                    },
                )
                .await
                .unwrap()
                .unwrap();
                assert!(!unpaid.paid);
                assert!(unpaid.paid_date.is_none());
            }

            #[tokio::test]
            async fn test_invoice_update_missing() {
                let store = $factory;
                let result = InvoiceService::update(&store, 999_999, InvoiceChanges::default())
                    .await
                    .unwrap();
                assert!(result.is_none());
            }

            #[tokio::test]
            async fn test_invoice_delete() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();
                let invoice = InvoiceService::create(&store, new_invoice("ibm", 100.0))
                    .await
                    .unwrap();

                assert!(InvoiceService::delete(&store, invoice.id).await.unwrap());
                assert!(!InvoiceService::delete(&store, invoice.id).await.unwrap());
                assert!(InvoiceService::get(&store, invoice.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_company_delete_cascades() {
                let store = $factory;
                CompanyService::create(&store, new_company("ibm", "IBM"))
                    .await
                    .unwrap();
                let invoice = InvoiceService::create(&store, new_invoice("ibm", 100.0))
                    .await
                    .unwrap();

                assert!(CompanyService::delete(&store, "ibm").await.unwrap());
                assert!(InvoiceService::get(&store, invoice.id).await.unwrap().is_none());
            }
        }
    };
}
