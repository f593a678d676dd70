use std::time::Instant;

pub fn time_phase<T, E, F>(op: F) -> Result<(T, f64), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let value = op()?;
    Ok((value, start.elapsed().as_secs_f64() * 1000.0))
}
