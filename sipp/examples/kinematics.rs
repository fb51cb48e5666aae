//! Projectile kinematics with static units, then the same quantities read
//! back through the runtime registry.
//!
//! Run with `RUST_LOG=sipp=debug` to see unit registration.

use miette::Result;
use sipp::dynamic::{DynamicMeasure, UnitRegistry};
use sipp::si::{
    Joule, Kilogram, Meter, MeterPerSecond, MeterPerSecondSquared, Newton, Second, Watt,
};
use sipp::Measure;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mass: Measure<f64, Kilogram> = Measure::new(2.0);
    let gravity: Measure<f64, MeterPerSecondSquared> = Measure::new(9.81);
    let launch: Measure<f64, MeterPerSecond> = Measure::new(20.0);
    let flight: Measure<f64, Second> = (2.0 * launch / gravity).into_unit();

    let weight: Measure<f64, Newton> = Measure::from_unit(mass * gravity);
    let apex: Measure<f64, Meter> = (launch * launch / (2.0 * gravity)).into_unit();
    let work: Measure<f64, Joule> = Measure::from_unit(weight * apex);
    let power: Measure<f64, Watt> = (work / (0.5 * flight)).into_unit();

    info!(%flight, %weight, %apex, %work, %power, "static results");
    println!("flight time: {}", flight);
    println!("weight:      {}", weight);
    println!("apex:        {}", apex);
    println!("work:        {}", work);
    println!("power:       {}", power);

    let mut registry = UnitRegistry::with_si();
    registry.define("impulse", "N*s")?;

    let dynamic_work = DynamicMeasure::from_static(work);
    let read_back = registry.measure(*work.value(), "kg*m^2/s^2")?;
    let total = dynamic_work.checked_add(&read_back)?;
    println!("work twice:  {}", total);
    println!("as joules:   {}", total.into_static::<Joule>()?);

    let impulse = registry.measure(*weight.value() * *flight.value(), "impulse")?;
    match impulse.checked_add(&read_back) {
        Ok(sum) => println!("unexpected sum: {}", sum),
        Err(err) => println!("rejected:    {}", err),
    }

    Ok(())
}
