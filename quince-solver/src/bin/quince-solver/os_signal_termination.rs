use quince_solver::termination::StopSignal;

/// Route SIGINT and SIGTERM to `stop_signal`, so an interrupted solve stops at the next node and
/// still reports its best solution.
pub(crate) fn install(stop_signal: &StopSignal) -> std::io::Result<()> {
    // The signals to listen to for termination.
    const TERMINATION_SIGNALS: &[std::ffi::c_int] =
        &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

    for &signal in TERMINATION_SIGNALS {
        let _ = signal_hook::flag::register(signal, stop_signal.flag())?;
    }

    Ok(())
}
