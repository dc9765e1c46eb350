use futures::future;
use std::{
	fmt::{Debug, Display},
	io::{self, Write},
	sync::{Arc, Mutex},
};
use workbench_pipeline::base::{Filter, ItemStream, PipelineData, RunError};

use super::{streaming, Step};

/// A writer that may be shared between an [`EchoFilter`] and its owner
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Where an [`EchoFilter`] writes
#[derive(Clone, Default)]
pub enum EchoTarget {
	#[default]
	Stdout,
	Stderr,

	/// Any other writer, e.g. a file or an in-memory buffer
	Writer(SharedWriter),
}

impl Debug for EchoTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Stdout => write!(f, "Stdout"),
			Self::Stderr => write!(f, "Stderr"),
			Self::Writer(_) => write!(f, "Writer"),
		}
	}
}

/// Writes each item on its own line, then passes it on unchanged
#[derive(Debug, Clone, Default)]
pub struct EchoFilter {
	target: EchoTarget,
}

impl EchoFilter {
	pub fn new(target: EchoTarget) -> Self {
		Self { target }
	}

	pub fn stdout() -> Self {
		Self::new(EchoTarget::Stdout)
	}

	pub fn stderr() -> Self {
		Self::new(EchoTarget::Stderr)
	}

	pub fn writer(writer: SharedWriter) -> Self {
		Self::new(EchoTarget::Writer(writer))
	}

	pub fn target(&self) -> &EchoTarget {
		&self.target
	}

	fn echo(&self, item: &impl Display) -> Result<(), RunError> {
		match &self.target {
			EchoTarget::Stdout => write_line(&mut io::stdout().lock(), item),
			EchoTarget::Stderr => write_line(&mut io::stderr().lock(), item),
			EchoTarget::Writer(writer) => {
				let mut writer = writer
					.lock()
					.map_err(|_poisoned| RunError::failed("echo writer lock is poisoned"))?;
				write_line(&mut *writer, item)
			}
		}
	}
}

fn write_line(out: &mut (impl Write + ?Sized), item: &impl Display) -> Result<(), RunError> {
	writeln!(out, "{item}")?;
	return Ok(());
}

impl<T: PipelineData + Display> Filter<T> for EchoFilter {
	fn name(&self) -> &'static str {
		"Echo"
	}

	fn apply<'a>(&'a self, input: ItemStream<'a, T>) -> ItemStream<'a, T> {
		streaming(input, move |_, item| {
			let res = self.echo(&item).map(|()| Step::Emit(item));
			future::ready(res)
		})
	}
}
