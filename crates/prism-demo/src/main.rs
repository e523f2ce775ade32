//! Walks a unit cube through a transform pipeline built with `prism-linalg`.
//!
//! # Environment Variables
//!
//! * `PRISM_DEMO_SCALE`: uniform scale factor applied to the cube (default `2.0`).
//! * `PRISM_DEMO_OFFSET`: comma-separated translation applied after scaling (default `1,2,3`).
//! * `RUST_LOG`: overrides the log filter. The demo logs at *debug* level by default.

mod config;

use anyhow::ensure;
use itertools::{iproduct, Itertools};
use log::LevelFilter;
use prism_linalg::{vec3, vec4, Mat4f, Vec3f, Vec4f};

use crate::config::Config;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = Config::from_env()?;
    log::debug!("{config:?}");

    transform_cube(&config)?;
    reorder_color()?;
    bounce_ray()?;

    Ok(())
}

/// Drops the homogeneous coordinate of a transformed point.
fn point(p: Vec4f) -> Vec3f {
    vec3(p.x(), p.y(), p.z())
}

/// Scales and translates the corners of a cube centered at the origin.
fn transform_cube(config: &Config) -> anyhow::Result<()> {
    let mut transform = Mat4f::identity();
    transform.translate(config.offset);
    transform.scale(vec4(config.scale, config.scale, config.scale, 1.0));
    log::debug!("model transform: {transform:?}");

    let corners = iproduct!([-0.5, 0.5], [-0.5, 0.5], [-0.5, 0.5])
        .map(|(x, y, z)| vec4(x, y, z, 1.0))
        .collect_vec();
    let transformed = corners.iter().map(|&c| transform * c).collect_vec();
    for (from, to) in corners.iter().zip(&transformed) {
        log::debug!("{} -> {}", point(*from), point(*to));
    }

    let center = transformed
        .iter()
        .fold(Vec4f::ZERO, |acc, &c| acc + c)
        / transformed.len() as f32;
    let center = point(center);
    ensure!(
        (center - config.offset).length() < 1e-5,
        "cube center {center} does not match offset {}",
        config.offset,
    );

    let edge = (transformed[1] - transformed[0]).length();
    ensure!(
        (edge - f64::from(config.scale.abs())).abs() < 1e-5,
        "edge length {edge} does not match scale {}",
        config.scale,
    );

    log::info!(
        "cube centered at {center} with edge length {edge:.3}, corners: {}",
        transformed.iter().map(|&c| point(c)).join(", "),
    );
    Ok(())
}

/// Converts an RGBA color to BGRA by swizzling, and back.
fn reorder_color() -> anyhow::Result<()> {
    let rgba = vec4(0.9f32, 0.5, 0.1, 1.0);
    let bgra = rgba.bgra().materialize();
    log::info!("RGBA {rgba} is BGRA {bgra}");

    let mut restored = Vec4f::ZERO;
    restored.bgra_mut().assign(bgra);
    ensure!(restored == rgba, "swizzle round-trip produced {restored}");

    let translucent = vec4(0.9f32, 0.5, 0.1, 0.5);
    let mut premultiplied = translucent;
    let alpha = premultiplied.a();
    let mut view = premultiplied.abgr_mut();
    view *= vec4(1.0, alpha, alpha, alpha);
    log::info!("{translucent} with premultiplied alpha is {premultiplied}");
    ensure!(premultiplied.a() == alpha, "premultiplying changed alpha");
    Ok(())
}

/// Reflects a ray off the ground plane.
fn bounce_ray() -> anyhow::Result<()> {
    let direction: Vec3f = vec3(1.0, -1.0, 0.5).normalized();
    let bounced = direction.reflected(Vec3f::Y);
    log::info!("ray {direction:.3} bounces off the ground as {bounced:.3}");

    ensure!(bounced.y() > 0.0, "reflected ray still points down");
    ensure!(
        (bounced.length() - 1.0).abs() < 1e-6,
        "reflection changed the ray's length to {}",
        bounced.length(),
    );
    ensure!(
        bounced.x() == direction.x() && bounced.z() == direction.z(),
        "reflection off the ground changed the horizontal direction"
    );
    Ok(())
}
