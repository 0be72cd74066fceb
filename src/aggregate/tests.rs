#[cfg(test)]
mod aggregate_tests {
    mod aggregate_store_tests {
        use std::collections::{BTreeMap, BTreeSet};
        use std::sync::Arc;
        use std::thread;
        use crate::aggregate::structs::aggregate_store::AggregateStore;

        #[test]
        fn test_new_store_is_empty() {
            let store = AggregateStore::new();
            let snapshot = store.snapshot();
            assert!(snapshot.is_empty());
            assert_eq!(snapshot.unique_views, 0);
            assert_eq!(store.get_page_count("test1"), 0);
        }

        #[test]
        fn test_record_visit_scenario() {
            let store = AggregateStore::new();
            store.record_visit("test1", "10.0.0.1");
            store.record_visit("test1", "10.0.0.2");
            store.record_visit("test2", "10.0.0.1");

            let snapshot = store.snapshot();
            let expected: BTreeMap<String, u64> = [("test1".to_string(), 2), ("test2".to_string(), 1)].into_iter().collect();
            assert_eq!(snapshot.page_counts, expected);
            assert_eq!(snapshot.visitor_ids, ["10.0.0.1".to_string(), "10.0.0.2".to_string()].into_iter().collect::<BTreeSet<_>>());
            assert_eq!(snapshot.unique_views, 2);
            assert_eq!(snapshot.total_views(), 3);
        }

        #[test]
        fn test_same_visitor_counts_once() {
            let store = AggregateStore::new();
            for _ in 0..25 {
                store.record_visit("index", "192.168.1.10");
            }
            let snapshot = store.snapshot();
            assert_eq!(snapshot.unique_views, 1);
            assert_eq!(snapshot.page_counts.get("index"), Some(&25));
        }

        #[test]
        fn test_snapshot_is_independent_copy() {
            let store = AggregateStore::new();
            store.record_visit("index", "a");
            let before = store.snapshot();

            store.record_visit("index", "b");
            store.record_visit("about", "c");

            assert_eq!(before.page_counts.get("index"), Some(&1));
            assert!(!before.page_counts.contains_key("about"));
            assert_eq!(before.unique_views, 1);
            assert_eq!(store.snapshot().unique_views, 3);
        }

        #[test]
        fn test_restore_populates_store() {
            let store = AggregateStore::new();
            let page_counts: BTreeMap<String, u64> = [("index".to_string(), 40), ("about".to_string(), 2)].into_iter().collect();
            let visitor_ids: BTreeSet<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
            store.restore(page_counts.clone(), visitor_ids.clone());

            let snapshot = store.snapshot();
            assert_eq!(snapshot.page_counts, page_counts);
            assert_eq!(snapshot.visitor_ids, visitor_ids);
            assert_eq!(snapshot.unique_views, 2);

            store.record_visit("index", "a");
            assert_eq!(store.get_page_count("index"), 41);
            assert_eq!(store.snapshot().unique_views, 2);
        }

        #[test]
        fn test_summary() {
            let store = AggregateStore::new();
            store.record_visit("test1", "a");
            store.record_visit("test1", "b");
            store.record_visit("test2", "a");
            let summary = store.summary();
            assert_eq!(summary.pages, 2);
            assert_eq!(summary.views, 3);
            assert_eq!(summary.unique_views, 2);
        }

        #[test]
        fn test_concurrent_record_visit() {
            let store = Arc::new(AggregateStore::new());
            let mut handles = vec![];

            for thread_id in 0..8 {
                let store_clone = store.clone();
                handles.push(thread::spawn(move || {
                    for i in 0..1000 {
                        let page = if i % 2 == 0 { "even" } else { "odd" };
                        store_clone.record_visit(page, &format!("client-{}", thread_id));
                    }
                }));
            }

            for handle in handles {
                handle.join().unwrap();
            }

            let snapshot = store.snapshot();
            assert_eq!(snapshot.page_counts.get("even"), Some(&4000));
            assert_eq!(snapshot.page_counts.get("odd"), Some(&4000));
            assert_eq!(snapshot.unique_views, 8);
        }

        #[test]
        fn test_snapshot_consistent_under_writers() {
            let store = Arc::new(AggregateStore::new());
            let writer = {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..5000 {
                        store.record_visit(&format!("page-{}", i), &format!("client-{}", i));
                    }
                })
            };

            // Every visit adds exactly one page and one visitor, so a
            // consistent snapshot always has as many pages as visitors.
            for _ in 0..200 {
                let snapshot = store.snapshot();
                assert_eq!(snapshot.page_counts.len() as u64, snapshot.unique_views);
                assert_eq!(snapshot.visitor_ids.len() as u64, snapshot.unique_views);
            }

            writer.join().unwrap();
            assert_eq!(store.snapshot().unique_views, 5000);
        }
    }

    mod aggregate_property_tests {
        use std::collections::{BTreeMap, BTreeSet};
        use std::sync::Arc;
        use std::thread;
        use proptest::prelude::*;
        use crate::aggregate::structs::aggregate_store::AggregateStore;

        proptest! {
            #[test]
            fn prop_count_equals_calls(visits in prop::collection::vec(("[a-e]", "[0-9]{1,2}"), 0..200)) {
                let store = Arc::new(AggregateStore::new());
                let chunks: Vec<Vec<(String, String)>> = visits.chunks(16).map(|chunk| chunk.to_vec()).collect();
                let handles: Vec<_> = chunks.into_iter().map(|chunk| {
                    let store = store.clone();
                    thread::spawn(move || {
                        for (page, client) in chunk {
                            store.record_visit(&page, &client);
                        }
                    })
                }).collect();
                for handle in handles {
                    handle.join().unwrap();
                }

                let mut expected: BTreeMap<String, u64> = BTreeMap::new();
                let mut clients: BTreeSet<String> = BTreeSet::new();
                for (page, client) in &visits {
                    *expected.entry(page.clone()).or_insert(0) += 1;
                    clients.insert(client.clone());
                }

                let snapshot = store.snapshot();
                prop_assert_eq!(snapshot.page_counts, expected);
                prop_assert_eq!(snapshot.unique_views, clients.len() as u64);
                prop_assert_eq!(snapshot.visitor_ids, clients);
            }

            #[test]
            fn prop_repeated_client_counts_once(client in "[a-z0-9.:]{1,20}", repeats in 1usize..50) {
                let store = AggregateStore::new();
                for _ in 0..repeats {
                    store.record_visit("index", &client);
                }
                prop_assert_eq!(store.snapshot().unique_views, 1);
                prop_assert_eq!(store.get_page_count("index"), repeats as u64);
            }
        }
    }
}
