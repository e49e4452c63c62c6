//! Latency benchmarks for the signing path.
//!
//! Run with: `cargo bench --bench latency`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use connectkit::actions::accounts::{self, ConnectArgs};
use connectkit::actions::Client;
use connectkit::connectors::{MockConnector, MockOptions};
use connectkit::core::signing::recover_typed_data_address;
use connectkit::core::{TypedDataRequest, WalletClient};

const TEST_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Generate a Mail request addressed to `recipients` people.
fn generate_request(recipients: usize) -> TypedDataRequest {
    let to: Vec<_> = (0..recipients)
        .map(|i| {
            json!({
                "name": format!("Recipient {}", i),
                "wallet": format!("0x{:040x}", i + 1),
            })
        })
        .collect();

    serde_json::from_value(json!({
        "domain": {
            "name": "Ether Mail",
            "version": "1",
            "chainId": 1,
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC"
        },
        "types": {
            "Person": [
                { "name": "name", "type": "string" },
                { "name": "wallet", "type": "address" }
            ],
            "Mail": [
                { "name": "from", "type": "Person" },
                { "name": "to", "type": "Person[]" },
                { "name": "contents", "type": "string" }
            ]
        },
        "primaryType": "Mail",
        "message": {
            "from": { "name": "Cow", "wallet": "0xCD2a3d9F938E13CD947Ec05AbC7FE734Df8DD826" },
            "to": to,
            "contents": "Hello!"
        }
    }))
    .expect("valid request")
}

/// Benchmark EIP-712 digest computation.
fn bench_signing_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("signing_hash");

    for recipients in [1, 10, 50].iter() {
        let request = generate_request(*recipients);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("mail", recipients),
            &request,
            |b, request| b.iter(|| black_box(request.signing_hash())),
        );
    }

    group.finish();
}

/// Benchmark a guarded sign through the registry and mock connector.
fn bench_guarded_sign(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let wallet = WalletClient::from_private_key(TEST_PRIVATE_KEY).expect("wallet");
    let client = Client::default();
    rt.block_on(accounts::connect(
        &client,
        ConnectArgs::new(Arc::new(MockConnector::new(MockOptions::new(wallet)))),
    ))
    .expect("connect");

    let request = generate_request(1);
    let mut group = c.benchmark_group("sign_typed_data");

    group.bench_function("guarded", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(accounts::sign_typed_data(&client, &request).await) })
    });

    let signature = rt
        .block_on(accounts::sign_typed_data(&client, &request))
        .expect("signature");
    group.bench_function("recover", |b| {
        b.iter(|| black_box(recover_typed_data_address(&request, &signature)))
    });

    group.finish();
}

criterion_group!(benches, bench_signing_hash, bench_guarded_sign);

criterion_main!(benches);
