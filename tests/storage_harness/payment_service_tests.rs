//! Macro-generated test suite for `PaymentService` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use payments::storage::InMemoryPaymentService;
//!
//! payment_service_tests!(InMemoryPaymentService::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get`: create then retrieve, verify all fields
//! - `test_ids_strictly_increase`: consecutive creates get growing ids
//! - `test_get_nonexistent` / `test_update_nonexistent` / `test_toggle_nonexistent`
//! - `test_update_existing`: replace fields, including the payment type
//! - `test_delete_existing` / `test_delete_nonexistent`
//!
//! ## Listing
//! - `test_list_empty`, `test_list_ordered_by_id`
//! - one test per filter criterion plus `test_filters_are_conjunctive`
//!
//! ## Maintenance
//! - `test_toggle_availability`, `test_reset_restarts_ids`, `test_concurrent_creates`

/// Generate a full `PaymentService` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty service. It is re-evaluated for
/// each test. For the concurrent test the service must be `Clone + 'static`.
#[macro_export]
macro_rules! payment_service_tests {
    ($factory:expr) => {
        mod payment_service_contract_tests {
            use super::*;
            use payments::core::{PaymentFilter, PaymentService, PaymentType};

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let service = $factory;
                let payment = credit_card_payment(11, 22, true);

                let created = service.create(payment.clone()).await.unwrap();
                assert!(created.id >= 1);
                assert_same_fields(&created, &payment);

                let retrieved = service.get(created.id).await.unwrap();
                assert_eq!(retrieved, Some(created));
            }

            #[tokio::test]
            async fn test_ids_strictly_increase() {
                let service = $factory;
                let first = service.create(paypal_payment(1, 1, true)).await.unwrap();
                let second = service.create(paypal_payment(2, 1, true)).await.unwrap();
                let third = service.create(paypal_payment(3, 1, true)).await.unwrap();

                assert!(first.id < second.id && second.id < third.id);
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                assert!(service.get(9999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let created = service.create(credit_card_payment(1, 1, true)).await.unwrap();

                let replacement = paypal_payment(5, 6, false);
                let updated = service
                    .update(created.id, replacement.clone())
                    .await
                    .unwrap()
                    .expect("payment should exist");

                assert_eq!(updated.id, created.id);
                assert_same_fields(&updated, &replacement);
                assert_eq!(updated.payment_type(), PaymentType::Paypal);

                let retrieved = service.get(created.id).await.unwrap().unwrap();
                assert_eq!(retrieved, updated);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let result = service.update(9999, paypal_payment(1, 1, true)).await.unwrap();
                assert!(result.is_none(), "Updating an unknown id should return None");
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let created = service.create(paypal_payment(1, 1, true)).await.unwrap();

                service.delete(created.id).await.unwrap();
                assert!(service.get(created.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $factory;
                service.delete(9999).await.unwrap();
                service.delete(9999).await.unwrap();
            }

            // ==================================================================
            // Listing
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;
                let all = service.list(&PaymentFilter::new()).await.unwrap();
                assert!(all.is_empty(), "List on empty store should return empty vec");
            }

            #[tokio::test]
            async fn test_list_ordered_by_id() {
                let service = $factory;
                for order_id in 1..=5 {
                    service.create(paypal_payment(order_id, 1, true)).await.unwrap();
                }

                let all = service.list(&PaymentFilter::new()).await.unwrap();
                assert_eq!(all.len(), 5);

                let listed = ids(&all);
                let mut sorted = listed.clone();
                sorted.sort();
                assert_eq!(listed, sorted);
            }

            #[tokio::test]
            async fn test_filter_by_order_id() {
                let service = $factory;
                service.create(paypal_payment(1, 1, true)).await.unwrap();
                service.create(paypal_payment(2, 1, true)).await.unwrap();
                service.create(credit_card_payment(2, 3, false)).await.unwrap();

                let found = service.list(&PaymentFilter::new().order_id(2)).await.unwrap();
                assert_eq!(found.len(), 2);
                assert!(found.iter().all(|p| p.order_id == 2));
            }

            #[tokio::test]
            async fn test_filter_by_customer_id() {
                let service = $factory;
                service.create(paypal_payment(1, 7, true)).await.unwrap();
                service.create(paypal_payment(2, 8, true)).await.unwrap();

                let found = service.list(&PaymentFilter::new().customer_id(7)).await.unwrap();
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].customer_id, 7);
            }

            #[tokio::test]
            async fn test_filter_by_available() {
                let service = $factory;
                service.create(paypal_payment(1, 1, true)).await.unwrap();
                service.create(paypal_payment(2, 1, false)).await.unwrap();
                service.create(paypal_payment(3, 1, false)).await.unwrap();

                let unavailable = service.list(&PaymentFilter::new().available(false)).await.unwrap();
                assert_eq!(unavailable.len(), 2);
                assert!(unavailable.iter().all(|p| !p.available));
            }

            #[tokio::test]
            async fn test_filter_by_type() {
                let service = $factory;
                service.create(paypal_payment(1, 1, true)).await.unwrap();
                service.create(credit_card_payment(2, 1, true)).await.unwrap();

                let cards = service
                    .list(&PaymentFilter::new().payment_type(PaymentType::CreditCard))
                    .await
                    .unwrap();
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].payment_type(), PaymentType::CreditCard);
            }

            #[tokio::test]
            async fn test_filters_are_conjunctive() {
                let service = $factory;
                service.create(paypal_payment(1, 4, true)).await.unwrap();
                service.create(paypal_payment(1, 4, false)).await.unwrap();
                service.create(credit_card_payment(1, 4, true)).await.unwrap();
                service.create(paypal_payment(1, 5, true)).await.unwrap();

                let filter = PaymentFilter::new()
                    .customer_id(4)
                    .available(true)
                    .payment_type(PaymentType::Paypal);
                let found = service.list(&filter).await.unwrap();
                assert_eq!(found.len(), 1);
                assert_same_fields(&found[0], &paypal_payment(1, 4, true));
            }

            #[tokio::test]
            async fn test_filter_without_matches() {
                let service = $factory;
                service.create(paypal_payment(1, 1, true)).await.unwrap();

                let found = service.list(&PaymentFilter::new().order_id(42)).await.unwrap();
                assert!(found.is_empty());
            }

            // ==================================================================
            // Maintenance
            // ==================================================================

            #[tokio::test]
            async fn test_toggle_availability() {
                let service = $factory;
                let created = service.create(credit_card_payment(1, 2, true)).await.unwrap();

                let toggled = service.toggle_availability(created.id).await.unwrap().unwrap();
                assert!(!toggled.available);
                assert_eq!(toggled.method, created.method);
                assert_eq!(service.get(created.id).await.unwrap().unwrap(), toggled);

                let again = service.toggle_availability(created.id).await.unwrap().unwrap();
                assert!(again.available);
            }

            #[tokio::test]
            async fn test_toggle_nonexistent() {
                let service = $factory;
                assert!(service.toggle_availability(9999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_reset_restarts_ids() {
                let service = $factory;
                for order_id in 1..=3 {
                    service.create(paypal_payment(order_id, 1, true)).await.unwrap();
                }

                service.reset().await.unwrap();
                assert!(service.list(&PaymentFilter::new()).await.unwrap().is_empty());

                let created = service.create(paypal_payment(9, 9, true)).await.unwrap();
                assert_eq!(created.id, 1);
            }

            #[tokio::test]
            async fn test_concurrent_creates() {
                let service = $factory;
                let mut handles = Vec::new();

                for order_id in 1..=10 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service.create(paypal_payment(order_id, 1, true)).await
                    }));
                }

                let mut created_ids = Vec::new();
                for handle in handles {
                    created_ids.push(handle.await.unwrap().unwrap().id);
                }
                created_ids.sort();
                created_ids.dedup();
                assert_eq!(created_ids.len(), 10, "Every create should get its own id");

                let all = service.list(&PaymentFilter::new()).await.unwrap();
                assert_eq!(all.len(), 10);
            }
        }
    };
}
