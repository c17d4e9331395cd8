//! Weighted pool quoting example (Balancer style).
//!
//! Prices trades against an 80/20 WETH/DAI snapshot: spot price, an
//! exact-in and an exact-out quote, the reverse direction, and a trade that
//! trips the pool's ratio limit.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=cmmm_math=debug cargo run --example weighted
//! ```

use cmmm_math::config::{QuoteConfig, WeightedPairState};
use cmmm_math::domain::{ScaledInt, SwapSpec};
use cmmm_math::pools::WeightedPair;
use cmmm_math::traits::SwapQuoter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Weighted Pool Quotes (Balancer style) ===\n");

    // ── 1. Snapshot an 80/20 pool ───────────────────────────────────────
    //    Denormalized weights 8 and 2; only their ratio matters.
    let state = WeightedPairState::new(
        ScaledInt::parse_units("100")?,  // WETH balance
        ScaledInt::parse_units("8")?,    // WETH weight
        ScaledInt::parse_units("400")?,  // DAI balance
        ScaledInt::parse_units("2")?,    // DAI weight
        ScaledInt::parse_units("0.003")?, // 0.30% fee
    )?;
    println!("Balance WETH: {}", state.balance_in().format_units());
    println!("Balance DAI:  {}", state.balance_out().format_units());
    println!("Swap fee:     {}", state.swap_fee().format_units());

    let pair = WeightedPair::new(state, QuoteConfig::default())?;

    // ── 2. Spot price ───────────────────────────────────────────────────
    println!(
        "\nSpot price (WETH per DAI): {}",
        pair.spot_price()?.format_units()
    );

    // ── 3. Sell exactly 1 WETH ──────────────────────────────────────────
    let quote = pair.quote(SwapSpec::exact_in(ScaledInt::ONE)?)?;
    println!("\nExact in: {}", quote);
    println!("  DAI out:         {}", quote.amount_out().format_units());
    println!("  Effective price: {}", quote.effective_price()?.format_units());

    // ── 4. Buy exactly 10 DAI ───────────────────────────────────────────
    let quote = pair.quote(SwapSpec::exact_out(ScaledInt::parse_units("10")?)?)?;
    println!("\nExact out: {}", quote);
    println!("  WETH in:         {}", quote.amount_in().format_units());

    // ── 5. Reverse direction ────────────────────────────────────────────
    let reverse = pair.reversed();
    let quote = reverse.quote(SwapSpec::exact_in(ScaledInt::ONE)?)?;
    println!(
        "\nSell 1 DAI for {} WETH (spot {})",
        quote.amount_out().format_units(),
        reverse.spot_price()?.format_units()
    );

    // ── 6. Trade limits ─────────────────────────────────────────────────
    println!("\nMax WETH in:  {}", pair.max_amount_in()?.format_units());
    println!("Max DAI out:  {}", pair.max_amount_out()?.format_units());
    match pair.quote(SwapSpec::exact_in(ScaledInt::parse_units("75")?)?) {
        Ok(q) => println!("Unexpectedly quoted {q}"),
        Err(e) => println!("Selling 75 WETH rejected: {e}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
