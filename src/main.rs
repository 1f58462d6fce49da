//! stable-match - Binary Entry Point
//!
//! Solves a seeded random marriage market and a seeded random college
//! admissions market, then prints a report for each.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::{analysis, Market, MatchingEngine, RandomMarket};

const SEED: u64 = 42;
const NUM_PROPOSERS: usize = 1_000;
const NUM_RESPONDENTS: usize = 200;

fn main() {
    println!("===========================================");
    println!("  stable-match - Deferred Acceptance");
    println!("===========================================");
    println!();

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut engine = MatchingEngine::new();

    let marriage = RandomMarket::new(NUM_PROPOSERS, NUM_PROPOSERS).generate(&mut rng);
    report("One-to-one", &marriage, &mut engine);

    let admissions = RandomMarket::new(NUM_PROPOSERS, NUM_RESPONDENTS)
        .with_capacities(true)
        .generate(&mut rng);
    report("Many-to-one", &admissions, &mut engine);

    println!("Markets solved: {}", engine.runs());
    println!("Total proposals: {}", engine.total_proposals());
}

fn report(title: &str, market: &Market, engine: &mut MatchingEngine) {
    println!("{} market (seed={})", title, SEED);
    println!("  Proposers:   {:>10}", market.num_proposers());
    println!("  Respondents: {:>10}", market.num_respondents());
    if let Some(caps) = market.capacities() {
        println!("  Seats:       {:>10}", caps.iter().sum::<usize>());
    }

    let start = Instant::now();
    let result = engine.run(market);
    let elapsed = start.elapsed();

    let receipt = result.receipt();
    println!();
    println!("  Matched:     {:>10}", receipt.matched_pairs);
    println!("  Rounds:      {:>10}", receipt.rounds);
    println!("  Proposals:   {:>10}", receipt.proposals);
    println!("  Evictions:   {:>10}", receipt.evictions);
    println!("  Elapsed:     {:>10.2?}", elapsed);
    if let Some(rate) = receipt.match_rate() {
        println!("  Match rate:  {:>10.4}", rate);
    }
    println!("  Digest:      {}", receipt.digest_hex());

    let stable = analysis::is_stable(market, &result);
    let rational = analysis::is_individually_rational(market, &result);
    let within_caps = analysis::respects_capacities(market, &result);
    println!();
    println!("  Stable:                {}", if stable { "YES" } else { "NO" });
    println!("  Individually rational: {}", if rational { "YES" } else { "NO" });
    println!("  Within capacities:     {}", if within_caps { "YES" } else { "NO" });
    println!();
}
