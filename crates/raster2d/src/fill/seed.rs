use super::buffer::RasterBuffer;
use crate::types::Tracer;
use crate::KernelError;

/// Seed fill tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedFillCfg {
    /// Painted pixels between two polls of the cancellation callback (min 1).
    pub poll_interval: usize,
}

impl Default for SeedFillCfg {
    fn default() -> Self {
        Self {
            poll_interval: 4096,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    Completed { painted: usize },
    /// The callback asked to stop; the buffer keeps what was painted so far.
    Cancelled { painted: usize },
}

impl FillOutcome {
    pub fn painted(self) -> usize {
        match self {
            FillOutcome::Completed { painted } | FillOutcome::Cancelled { painted } => painted,
        }
    }

    pub fn is_cancelled(self) -> bool {
        matches!(self, FillOutcome::Cancelled { .. })
    }
}

/// Seed fill progress, in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedEvent {
    /// Flood fill painted one pixel.
    Pixel { x: i32, y: i32 },
    /// Scanline seed fill painted `x_left..=x_right` on row `y`.
    Span { y: i32, x_left: i32, x_right: i32 },
    /// Scanline seed fill queued a seed for a neighbouring sub-span.
    Seed { x: i32, y: i32 },
}

/// Counts painted pixels and polls the callback every `interval` of them.
struct Poller<C> {
    interval: usize,
    since_poll: usize,
    painted: usize,
    cancel: C,
}

impl<C: FnMut() -> bool> Poller<C> {
    fn new(cfg: &SeedFillCfg, cancel: C) -> Self {
        Self {
            interval: cfg.poll_interval.max(1),
            since_poll: 0,
            painted: 0,
            cancel,
        }
    }

    /// True when the callback requested cancellation.
    fn advance(&mut self, n: usize) -> bool {
        self.painted += n;
        self.since_poll += n;
        if self.since_poll < self.interval {
            return false;
        }
        self.since_poll = 0;
        (self.cancel)()
    }

    fn cancelled(&self, algo: &str) -> FillOutcome {
        tracing::debug!(algo, painted = self.painted, "seed fill cancelled");
        FillOutcome::Cancelled {
            painted: self.painted,
        }
    }

    fn completed(&self, algo: &str) -> FillOutcome {
        tracing::debug!(algo, painted = self.painted, "seed fill");
        FillOutcome::Completed {
            painted: self.painted,
        }
    }
}

/// Target color at the seed, or `None` when target already equals `fill`.
fn target_at<B: RasterBuffer + ?Sized>(
    buffer: &B,
    (x, y): (i32, i32),
    fill: B::Color,
) -> Result<Option<B::Color>, KernelError> {
    let target = buffer
        .get(x, y)
        .ok_or(KernelError::SeedOutOfBounds { x, y })?;
    Ok((target != fill).then_some(target))
}

pub fn flood_fill<B, C>(
    buffer: &mut B,
    seed: (i32, i32),
    fill: B::Color,
    cfg: &SeedFillCfg,
    cancel: C,
) -> Result<FillOutcome, KernelError>
where
    B: RasterBuffer + ?Sized,
    C: FnMut() -> bool,
{
    flood_fill_traced(buffer, seed, fill, cfg, cancel, &mut ())
}

/// 4-connected flood fill over an explicit stack.
///
/// A pixel is painted when popped with the target color; only in-bounds
/// neighbours still holding the target color are pushed, so the stack stays
/// within four entries per buffer pixel.
pub fn flood_fill_traced<B, C, T>(
    buffer: &mut B,
    seed: (i32, i32),
    fill: B::Color,
    cfg: &SeedFillCfg,
    cancel: C,
    trace: &mut T,
) -> Result<FillOutcome, KernelError>
where
    B: RasterBuffer + ?Sized,
    C: FnMut() -> bool,
    T: Tracer<SeedEvent> + ?Sized,
{
    let mut poll = Poller::new(cfg, cancel);
    let Some(target) = target_at(buffer, seed, fill)? else {
        return Ok(poll.completed("flood"));
    };

    let mut stack = vec![seed];
    while let Some((x, y)) = stack.pop() {
        if buffer.get(x, y) != Some(target) {
            continue;
        }
        buffer.set(x, y, fill);
        trace.record(SeedEvent::Pixel { x, y });
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if buffer.get(nx, ny) == Some(target) {
                stack.push((nx, ny));
            }
        }
        if poll.advance(1) {
            return Ok(poll.cancelled("flood"));
        }
    }
    Ok(poll.completed("flood"))
}

pub fn scanline_seed_fill<B, C>(
    buffer: &mut B,
    seed: (i32, i32),
    fill: B::Color,
    cfg: &SeedFillCfg,
    cancel: C,
) -> Result<FillOutcome, KernelError>
where
    B: RasterBuffer + ?Sized,
    C: FnMut() -> bool,
{
    scanline_seed_fill_traced(buffer, seed, fill, cfg, cancel, &mut ())
}

/// Span-based seed fill: paints whole target-colored runs and seeds one
/// pixel per maximal target run on the rows above and below.
///
/// Paints the same 4-connected region as [`flood_fill`].
pub fn scanline_seed_fill_traced<B, C, T>(
    buffer: &mut B,
    seed: (i32, i32),
    fill: B::Color,
    cfg: &SeedFillCfg,
    cancel: C,
    trace: &mut T,
) -> Result<FillOutcome, KernelError>
where
    B: RasterBuffer + ?Sized,
    C: FnMut() -> bool,
    T: Tracer<SeedEvent> + ?Sized,
{
    let mut poll = Poller::new(cfg, cancel);
    let Some(target) = target_at(buffer, seed, fill)? else {
        return Ok(poll.completed("scanline"));
    };

    let mut stack = vec![seed];
    while let Some((x, y)) = stack.pop() {
        if buffer.get(x, y) != Some(target) {
            continue;
        }
        let mut x_left = x;
        while buffer.get(x_left - 1, y) == Some(target) {
            x_left -= 1;
        }
        let mut x_right = x;
        while buffer.get(x_right + 1, y) == Some(target) {
            x_right += 1;
        }
        for xi in x_left..=x_right {
            buffer.set(xi, y, fill);
        }
        trace.record(SeedEvent::Span { y, x_left, x_right });

        for ny in [y + 1, y - 1] {
            queue_runs(buffer, ny, x_left, x_right, target, &mut stack, trace);
        }
        if poll.advance((x_right - x_left + 1) as usize) {
            return Ok(poll.cancelled("scanline"));
        }
    }
    Ok(poll.completed("scanline"))
}

/// Push the first pixel of every maximal target run of row `y` within
/// `x_left..=x_right`. A run starts at a target pixel preceded by a
/// non-target pixel or by the range start.
fn queue_runs<B, T>(
    buffer: &B,
    y: i32,
    x_left: i32,
    x_right: i32,
    target: B::Color,
    stack: &mut Vec<(i32, i32)>,
    trace: &mut T,
) where
    B: RasterBuffer + ?Sized,
    T: Tracer<SeedEvent> + ?Sized,
{
    if !(0..buffer.height()).contains(&y) {
        return;
    }
    let mut in_run = false;
    for x in x_left..=x_right {
        let is_target = buffer.get(x, y) == Some(target);
        if is_target && !in_run {
            stack.push((x, y));
            trace.record(SeedEvent::Seed { x, y });
        }
        in_run = is_target;
    }
}
