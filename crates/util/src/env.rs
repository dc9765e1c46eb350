use serde::de::DeserializeOwned;
use smartstring::{LazyCompact, SmartString};
use std::{env::VarError, io::ErrorKind, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvLoadError {
	#[error("i/o error")]
	IOError(#[from] std::io::Error),

	#[error("varerror")]
	VarError(#[from] VarError),

	#[error("line parse error: `{on_line}` at char {at_char}")]
	LineParse { on_line: String, at_char: usize },

	#[error("other dotenvy error")]
	Other(#[source] dotenvy::Error),

	#[error("missing value {0}")]
	MissingValue(SmartString<LazyCompact>),

	#[error("parse error: {0}")]
	OtherParseError(String),
}

impl From<envy::Error> for EnvLoadError {
	fn from(value: envy::Error) -> Self {
		match value {
			envy::Error::MissingValue(value) => Self::MissingValue(value.into()),
			envy::Error::Custom(message) => Self::OtherParseError(message),
		}
	}
}

impl From<dotenvy::Error> for EnvLoadError {
	fn from(value: dotenvy::Error) -> Self {
		match value {
			dotenvy::Error::Io(err) => Self::IOError(err),
			dotenvy::Error::EnvVar(err) => Self::VarError(err),
			dotenvy::Error::LineParse(on_line, at_char) => Self::LineParse { on_line, at_char },
			err => Self::Other(err),
		}
	}
}

pub enum LoadedEnv<T> {
	/// We loaded config from `.env` and env vars
	FoundFile { config: T, path: PathBuf },

	/// We could not find `.env` and only loaded env vars
	OnlyVars(T),
}

impl<T> LoadedEnv<T> {
	pub fn get_config(&self) -> &T {
		match self {
			Self::FoundFile { config, .. } => config,
			Self::OnlyVars(config) => config,
		}
	}
}

/// Load `.env` into the process environment.
/// Returns its path, or `None` if there is no `.env` to load.
fn read_dotenv() -> Result<Option<PathBuf>, EnvLoadError> {
	match dotenvy::dotenv() {
		Ok(path) => Ok(Some(path)),
		Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(None),
		Err(err) => Err(err.into()),
	}
}

/// Load the configuration type `T` from the current environment,
/// including the `.env` if it exists.
pub fn load_env<T: DeserializeOwned>() -> Result<LoadedEnv<T>, EnvLoadError> {
	let path = read_dotenv()?;
	let config = envy::from_env::<T>()?;

	return Ok(match path {
		Some(path) => LoadedEnv::FoundFile { config, path },
		None => LoadedEnv::OnlyVars(config),
	});
}

/// Like [`load_env`], but read variables from `vars` instead of the process environment.
/// `.env` is ignored.
pub fn load_vars<T, I>(vars: I) -> Result<T, EnvLoadError>
where
	T: DeserializeOwned,
	I: IntoIterator<Item = (String, String)>,
{
	return Ok(envy::from_iter::<_, T>(vars)?);
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;

	#[derive(Debug, Deserialize)]
	struct TestConfig {
		name: String,
		#[serde(default)]
		count: u64,
	}

	#[test]
	fn vars_are_case_insensitive() {
		let c: TestConfig = load_vars([(String::from("NAME"), String::from("wb"))]).unwrap();
		assert_eq!(c.name, "wb");
		assert_eq!(c.count, 0);
	}

	#[test]
	fn missing_value_is_reported() {
		let res = load_vars::<TestConfig, _>([(String::from("COUNT"), String::from("3"))]);
		assert!(matches!(res, Err(EnvLoadError::MissingValue(v)) if v.as_str() == "name"));
	}

	#[test]
	fn dotenv_errors_are_mapped() {
		let err: EnvLoadError = dotenvy::Error::LineParse(String::from("=x"), 0).into();
		assert!(matches!(err, EnvLoadError::LineParse { at_char: 0, .. }));

		let err: EnvLoadError = dotenvy::Error::EnvVar(VarError::NotPresent).into();
		assert!(matches!(err, EnvLoadError::VarError(VarError::NotPresent)));
	}

	#[test]
	fn bad_value_is_a_parse_error() {
		let res = load_vars::<TestConfig, _>([
			(String::from("NAME"), String::from("wb")),
			(String::from("COUNT"), String::from("many")),
		]);
		assert!(matches!(res, Err(EnvLoadError::OtherParseError(_))));
	}
}
