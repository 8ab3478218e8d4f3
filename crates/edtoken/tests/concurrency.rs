//! Issuer and verifier are shared freely across threads

use edtoken::{KeyPair, TokenIssuer, TokenVerifier};
use miniserde::{Deserialize, Serialize};
use std::thread;

#[derive(Serialize, Deserialize)]
struct Subject {
    subject: String,
}

const NOW: i64 = 1_704_067_200;

#[test]
fn test_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KeyPair>();
    assert_send_sync::<TokenIssuer>();
    assert_send_sync::<TokenVerifier>();
}

#[test]
fn test_parallel_issue_and_introspect() {
    let keys = KeyPair::generate().unwrap();
    let issuer = keys.issuer();
    let verifier = keys.verifier();

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let issuer = issuer.clone();
            let verifier = verifier.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    let name = format!("user-{n}-{i}");
                    let issued = issuer
                        .issue(
                            Subject {
                                subject: name.clone(),
                            },
                            NOW,
                        )
                        .unwrap();
                    let result = verifier.introspect::<Subject>(issued.as_str(), NOW);
                    assert_eq!(result.payload().map(|p| p.subject.as_str()), Some(name.as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
