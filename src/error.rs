//! 인증서 단가 계산 파이프라인의 오류 타입.
//!
//! 모든 오류는 입력값에서 결정되므로 재시도 의미가 없다. 발견 즉시 호출자에게 반환하며
//! 부분 결과는 만들지 않는다.
use thiserror::Error;

/// 계산 단계에서 발생 가능한 오류.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalculationError {
    /// 환율(USD per GBP)이 0 이하이거나 유한하지 않음
    #[error("invalid exchange rate: USD per GBP must be greater than 0 (got {0})")]
    InvalidRate(f64),

    /// 질량 기준 환산에 필요한 밀도가 0 이하
    #[error("invalid density: t/m3 must be greater than 0 for a per-tonne basis (got {0})")]
    InvalidDensity(f64),

    /// 에너지 비율이 0 이하
    #[error("invalid energy ratio: must be greater than 0 (got {0})")]
    InvalidEnergyRatio(f64),

    /// 리터당 인증서 수가 {1, 2} 밖
    #[error("invalid RTFC multiplier: certificates per litre must be 1 or 2 (got {0})")]
    InvalidMultiplier(u32),

    /// 음수 또는 비유한 시세
    #[error("invalid price: must be 0 or greater (got {0})")]
    NegativePrice(f64),

    /// 음수 또는 비유한 운송 프리미엄
    #[error("invalid shipping premium: must be 0 or greater (got {0})")]
    NegativePremium(f64),
}

/// 계산 결과 alias.
pub type Result<T, E = CalculationError> = std::result::Result<T, E>;
