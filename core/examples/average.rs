use rand::rngs::StdRng;
use rand::SeedableRng;
use sss_core::{
    aggregate_for_party, reconstruct, split, DemoField, EvaluationPoints,
    Share, DEMO_MODULUS,
};
use sss_math::prelude::ConstZero;

/// Private inputs of the three parties.
const SECRETS: [u32; 3] = [62, 85, 57];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

/// Three parties compute the average of their inputs. Each one splits its
/// value with threshold 3, everyone sums the shares they hold, and the sums
/// are interpolated at zero. No party sees another's input.
fn main() {
    init_tracing();

    let points = EvaluationPoints::<DemoField>::sequential(SECRETS.len())
        .expect("three parties fit the demo field");
    let mut rng = StdRng::from_os_rng();

    let dealt: Vec<_> = SECRETS
        .iter()
        .map(|&secret| {
            split(DemoField::from(secret), SECRETS.len(), &points, &mut rng)
                .expect("threshold equals the number of parties")
        })
        .collect();

    let summed: Vec<Share<DemoField>> = points
        .iter()
        .enumerate()
        .map(|(party, &x)| {
            let received: Vec<_> = dealt
                .iter()
                .filter_map(|set| set.share_for(party).copied())
                .collect();
            aggregate_for_party(x, &received)
                .expect("every share belongs to this party")
        })
        .collect();

    for share in &summed {
        println!("party at x = {} holds {}", share.x(), share.y());
    }

    let total = reconstruct(&summed, DemoField::ZERO)
        .expect("three distinct points interpolate");
    let average = total.value() as f64 / SECRETS.len() as f64;

    println!("field: GF({DEMO_MODULUS})");
    println!("aggregate: {total}");
    println!("average: {average:.1}");
    assert_eq!(total, DemoField::from(204u32));
}
