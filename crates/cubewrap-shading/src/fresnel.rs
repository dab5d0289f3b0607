//! Fresnel reflectance of a dielectric interface, with the rough-surface
//! shortcut checked against a numerically integrated GGX reference.

use std::f64::consts::{PI, TAU};
use std::fmt;

use glam::DVec2;

/// Reflectance at normal incidence.
#[must_use]
pub fn f0(n1: f64, n2: f64) -> f64 {
    let r = (n2 - n1) / (n1 + n2);
    r * r
}

/// Unpolarised Fresnel reflectance of a smooth interface from medium `n1`
/// into `n2`.
///
/// Returns 1 at or past grazing incidence and under total internal
/// reflection.
#[must_use]
pub fn fresnel_dielectric(n_dot_v: f64, n1: f64, n2: f64) -> f64 {
    if n_dot_v.is_nan() || n_dot_v <= 0.0 {
        return 1.0;
    }
    if n_dot_v >= 1.0 {
        return f0(n1, n2);
    }
    let eta = n1 / n2;
    let cos_t2 = 1.0 - eta * eta * (1.0 - n_dot_v * n_dot_v);
    if cos_t2 <= 0.0 {
        return 1.0;
    }
    let cos_t = cos_t2.sqrt();
    let r_s = (n1 * n_dot_v - n2 * cos_t) / (n1 * n_dot_v + n2 * cos_t);
    let r_p = (n1 * cos_t - n2 * n_dot_v) / (n1 * cos_t + n2 * n_dot_v);
    (r_s * r_s + r_p * r_p) * 0.5
}

/// Schlick's approximation.
#[must_use]
pub fn fresnel_schlick(n_dot_v: f64, f0: f64) -> f64 {
    f0 + (1.0 - f0) * (1.0 - n_dot_v).clamp(0.0, 1.0).powi(5)
}

/// Smooth Fresnel with its rise towards grazing capped at `1 - roughness`.
#[must_use]
pub fn fresnel_rough_simple(n_dot_v: f64, n1: f64, n2: f64, roughness: f64) -> f64 {
    let f0 = f0(n1, n2);
    let f = fresnel_dielectric(n_dot_v, n1, n2);
    let t = ((f - f0) / (1.0 - f0)).clamp(0.0, 1.0);
    f0 + (f0.max(1.0 - roughness) - f0) * t
}

/// Fresnel averaged over a GGX microfacet lobe, integrated over light
/// directions in the plane of incidence.
///
/// Each light direction is weighted by the GGX distribution of its half
/// vector and the Schlick-GGX visibility of the light; the view term is
/// constant and cancels. `steps` is the number of directions around the full
/// circle.
#[must_use]
pub fn fresnel_ggx(n_dot_v: f64, n1: f64, n2: f64, roughness: f64, steps: usize) -> f64 {
    let n_dot_v = n_dot_v.clamp(1e-7, 0.999_999_9);
    let view = DVec2::new(n_dot_v, (1.0 - n_dot_v * n_dot_v).sqrt());
    let r = roughness.clamp(0.015_625, 1.0);
    let a2 = r * r * r * r;
    let k = (r + 1.0) * (r + 1.0) * 0.125;

    let steps = steps.max(4);
    let mut sum = 0.0;
    let mut weight = 0.0;
    for i in 0..steps {
        let angle = TAU * i as f64 / steps as f64;
        let light = DVec2::new(angle.cos(), angle.sin());
        let half = (view + light).normalize_or_zero();

        let n_dot_l = light.x.max(0.0);
        let n_dot_h = half.x.max(0.0);
        let v_dot_h = view.dot(half).abs();

        let d = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
        let ndf = a2 / (PI * d * d);
        let w = ndf * (n_dot_l / (n_dot_l * (1.0 - k) + k));

        weight += w;
        sum += fresnel_dielectric(v_dot_h, n1, n2) * w;
    }
    if weight > 0.0 { sum / weight } else { f0(n1, n2) }
}

/// Refractive indices and sampling density for [`fresnel_report`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FresnelSetup {
    pub n1: f64,
    pub n2: f64,
    /// Angles sampled between 0° and 90° inclusive, minus one.
    pub angle_steps: usize,
    pub integration_steps: usize,
}

impl Default for FresnelSetup {
    fn default() -> Self {
        Self {
            n1: 1.0,
            n2: 1.5,
            angle_steps: 90,
            integration_steps: 4096,
        }
    }
}

/// Accuracy of the shortcuts at one roughness.
#[derive(Clone, Debug, PartialEq)]
pub struct FresnelRow {
    pub roughness: f64,
    /// Largest deviation of [`fresnel_rough_simple`] from the GGX reference.
    pub rough_simple_error: f64,
    /// Largest deviation of [`fresnel_schlick`] from the GGX reference.
    pub schlick_error: f64,
    /// GGX reference at normal incidence.
    pub ggx_normal: f64,
    /// GGX reference at grazing incidence.
    pub ggx_grazing: f64,
}

impl fmt::Display for FresnelRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r = {:.5}  simple {:.6}  schlick {:.6}  ggx 0deg {:.6}  ggx 90deg {:.6}",
            self.roughness,
            self.rough_simple_error,
            self.schlick_error,
            self.ggx_normal,
            self.ggx_grazing
        )
    }
}

/// Sweep the view angle from 0° to 90° for every roughness.
pub fn fresnel_report(setup: &FresnelSetup, roughness: &[f64]) -> Vec<FresnelRow> {
    let steps = setup.angle_steps.max(1);
    let f0 = f0(setup.n1, setup.n2);

    roughness
        .iter()
        .map(|&r| {
            let mut row = FresnelRow {
                roughness: r,
                rough_simple_error: 0.0,
                schlick_error: 0.0,
                ggx_normal: 0.0,
                ggx_grazing: 0.0,
            };
            for i in 0..=steps {
                let degrees = 90.0 * i as f64 / steps as f64;
                let n_dot_v = degrees.to_radians().cos();
                let reference =
                    fresnel_ggx(n_dot_v, setup.n1, setup.n2, r, setup.integration_steps);
                let simple = fresnel_rough_simple(n_dot_v, setup.n1, setup.n2, r);
                let schlick = fresnel_schlick(n_dot_v, f0);

                row.rough_simple_error = row.rough_simple_error.max((simple - reference).abs());
                row.schlick_error = row.schlick_error.max((schlick - reference).abs());
                if i == 0 {
                    row.ggx_normal = reference;
                }
                if i == steps {
                    row.ggx_grazing = reference;
                }
            }
            tracing::debug!(
                roughness = r,
                simple = row.rough_simple_error,
                schlick = row.schlick_error,
                "fresnel sweep"
            );
            row
        })
        .collect()
}
