use super::perf_stats::SimStats;
use super::WorldCore;

pub(super) fn set_paused(world: &mut WorldCore, paused: bool) {
    world.paused = paused;
}

pub(super) fn is_paused(world: &WorldCore) -> bool {
    world.paused
}

pub(super) fn set_ambient_temperature(world: &mut WorldCore, temp: f64) {
    world.ambient_temperature = temp;
}

pub(super) fn ambient_temperature(world: &WorldCore) -> f64 {
    world.ambient_temperature
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> SimStats {
    world.perf_stats.clone()
}
