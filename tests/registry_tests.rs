//! Swapping the process-wide suffix list while other threads classify hosts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use canonurl::*;

fn triple(sub: &str, domain: &str, tld: &str) -> (String, String, String) {
    (sub.to_string(), domain.to_string(), tld.to_string())
}

#[test]
fn test_readers_see_whole_snapshots_during_swaps() {
    let generic = || PublicSuffixList::from_rules(["com", "uk", "co.uk"]);
    let private = || PublicSuffixList::from_rules(["example.com", "bar.co.uk"]);
    registry::install(generic());

    // (host, under generic, under private)
    let cases = [
        ("www.example.com", triple("www", "example", "com"), triple("", "www", "example.com")),
        ("a.foo.bar.co.uk", triple("a.foo", "bar", "co.uk"), triple("a", "foo", "bar.co.uk")),
    ];

    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    for (host, under_generic, under_private) in &cases {
                        let result = split_host(host);
                        assert!(
                            result == *under_generic || result == *under_private,
                            "Mixed classification for {}: {:?}",
                            host,
                            result
                        );
                    }

                    // A held snapshot answers every lookup from the same rules.
                    let snapshot = registry::current().unwrap();
                    let is_generic = snapshot.is_exact("com");
                    for (host, under_generic, under_private) in &cases {
                        let wanted = if is_generic { under_generic } else { under_private };
                        assert_eq!(
                            snapshot.split_host(host),
                            *wanted,
                            "Snapshot changed under {}",
                            host
                        );
                    }
                }
            });
        }

        scope.spawn(|| {
            for i in 0..500 {
                if i % 2 == 0 {
                    registry::install(private());
                } else {
                    registry::install(generic());
                }
            }
            done.store(true, Ordering::Relaxed);
        });
    });

    assert!(registry::current().unwrap().is_exact("com"));
}
