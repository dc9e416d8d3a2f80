//! Site energy → activation energy → Arrhenius rate.

use kmc_core::{BOLTZMANN_EV_PER_K, KmcError, KmcResult, PhysicalParams};

/// Energy (eV) of an atom with `bonds` occupied neighbours.
#[inline]
pub fn site_energy(bonds: u8, bond_energy: f64) -> f64 {
    -(bonds as f64) * bond_energy / 2.0
}

/// Barrier (eV) for hopping from a site of energy `e_start` to `e_end`.
///
/// Uphill and neutral moves pay `(1 + alpha)` of the reaction energy;
/// downhill moves recover only `alpha` of it.
#[inline]
pub fn activation_energy(e_start: f64, e_end: f64, alpha: f64, e0: f64) -> f64 {
    let reaction = e_end - e_start;
    if reaction >= 0.0 {
        e0 + (1.0 + alpha) * reaction
    } else {
        e0 + alpha * reaction
    }
}

/// `f · exp(-E_a / (k_B · T))`, in 1/s.
#[inline]
pub fn arrhenius_rate(e_a: f64, temperature: f64, attempt_frequency: f64) -> f64 {
    attempt_frequency * (-e_a / (BOLTZMANN_EV_PER_K * temperature)).exp()
}

/// Rate for an atom leaving a site with `start` bonds for one with `end`
/// bonds (the moving atom itself not counted at the destination).
///
/// # Errors
/// `Config` if the result is negative or not finite (e.g. an extreme
/// downhill barrier that overflows `exp`).
pub fn transition_rate(params: &PhysicalParams, start: u8, end: u8) -> KmcResult<f64> {
    let e_start = site_energy(start, params.bond_energy);
    let e_end = site_energy(end, params.bond_energy);
    let e_a = activation_energy(e_start, e_end, params.alpha, params.e0);
    let rate = arrhenius_rate(e_a, params.temperature, params.attempt_frequency);
    if !(rate.is_finite() && rate >= 0.0) {
        return Err(KmcError::Config(format!(
            "rate for {start} → {end} bonds is not a finite non-negative number ({rate}); \
             E_a = {e_a} eV at T = {} K",
            params.temperature
        )));
    }
    Ok(rate)
}
