//! 计时
//!
//! ```ignore
//! let mut elapsed = None;
//! {
//!     let _timer = Timer::scoped(&mut elapsed);
//!     head.forward(&features)?;
//! } // 离开作用域时写入耗时
//! println!("{:?}", elapsed.unwrap());
//! ```

use std::time::{Duration, Instant};

/// 创建时开始计时，`stop()`后耗时固定不变
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    tic: Instant,
    elapsed: Option<Duration>,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            tic: Instant::now(),
            elapsed: None,
        }
    }

    /// 停止前返回至今的耗时，停止后返回停止时记录的耗时
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.tic.elapsed())
    }

    /// 停止计时并返回耗时，重复调用返回首次停止时的结果
    pub fn stop(&mut self) -> Duration {
        let tic = self.tic;
        *self.elapsed.get_or_insert_with(|| tic.elapsed())
    }

    pub fn is_stopped(&self) -> bool {
        self.elapsed.is_some()
    }

    /// 开始一个作用域计时，返回的守卫在被 drop 时把耗时写入`slot`
    pub fn scoped(slot: &mut Option<Duration>) -> TimerGuard<'_> {
        TimerGuard {
            timer: Self::start(),
            slot,
        }
    }
}

/// 见[`Timer::scoped`]
#[derive(Debug)]
pub struct TimerGuard<'a> {
    timer: Timer,
    slot: &'a mut Option<Duration>,
}

impl TimerGuard<'_> {
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        *self.slot = Some(self.timer.stop());
    }
}

/// 执行`f`并返回其结果与耗时
pub fn time<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let mut timer = Timer::start();
    let result = f();
    (result, timer.stop())
}
