use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnowflakeError {
	#[error("restore called with no stored pose")]
	EmptyPoseStack,
	#[error("unsupported cross-section shape index {0}")]
	UnsupportedShape(u8),
	#[error("unsupported pattern index {0}")]
	UnsupportedPattern(u8),
	#[error("prng step must be positive and finite")]
	ZeroStep,
	#[error("prng range [{min}, {max}] is empty or not finite")]
	InvalidRange { min: f64, max: f64 },
	#[error("branch count must be positive, got {0}")]
	InvalidBranchCount(u32),
	#[error("{0} subbranches halve the radius down to zero")]
	TooManySubbranches(u32),
	#[error("stroke length must be positive and finite, got {0}")]
	NonPositiveLength(f64),
}
