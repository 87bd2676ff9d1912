//! 세션 단위 PIN 잠금.
//!
//! 화면 계층이 소유하는 명시적 세션 객체이다. 계산 코어는 이 상태를 읽지 않는다.
use std::collections::BTreeSet;

/// PIN 자릿수.
pub const PIN_LENGTH: usize = 4;

/// 잠금 해제 시도 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// 잠금 해제됨 (이미 해제된 경우 포함)
    Unlocked,
    /// 4자리 입력이지만 PIN이 틀림
    Rejected,
    /// 입력이 4자리가 아님. 오류 표시 없이 무시한다.
    Incomplete,
}

/// 사용자 세션. 잠긴 상태로 시작한다.
#[derive(Debug, Clone)]
pub struct Session {
    valid_pins: BTreeSet<String>,
    unlocked: bool,
}

impl Session {
    pub fn new<I, S>(valid_pins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid_pins: valid_pins.into_iter().map(Into::into).collect(),
            unlocked: false,
        }
    }

    /// 잠금이 비활성화된 세션 (헤드리스 실행용).
    pub fn unlocked() -> Self {
        Self {
            valid_pins: BTreeSet::new(),
            unlocked: true,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// PIN으로 잠금 해제를 시도한다. 입력은 그대로 비교하며 공백을 허용하지 않는다.
    /// 한 번 해제되면 세션이 끝날 때까지 유지된다.
    pub fn try_unlock(&mut self, pin: &str) -> UnlockOutcome {
        if self.unlocked {
            return UnlockOutcome::Unlocked;
        }
        if pin.chars().count() != PIN_LENGTH {
            return UnlockOutcome::Incomplete;
        }
        if self.valid_pins.contains(pin) {
            self.unlocked = true;
            log::info!("session unlocked");
            UnlockOutcome::Unlocked
        } else {
            log::warn!("rejected PIN attempt");
            UnlockOutcome::Rejected
        }
    }

    /// 세션을 다시 잠근다.
    pub fn lock(&mut self) {
        self.unlocked = false;
    }
}

/// PIN 형식(4자리 ASCII 숫자)을 검사한다.
pub fn is_well_formed_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}
