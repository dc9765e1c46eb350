use tracing::{debug, warn};

use crate::{base::RunGroupError, Group};

/// A list of groups that run one after another
pub struct Worksheet {
	groups: Vec<Group>,
}

impl Worksheet {
	pub fn new() -> Self {
		Self { groups: Vec::new() }
	}

	/// Create a worksheet that runs `groups` in order
	pub fn with_groups(groups: Vec<Group>) -> Self {
		Self { groups }
	}

	pub fn groups(&self) -> &[Group] {
		&self.groups
	}

	/// Add a group to the end of this worksheet
	pub fn add_group(&mut self, group: Group) {
		self.groups.push(group);
	}

	/// Run every group in this worksheet, in order.
	/// Stops at the first group that fails.
	pub async fn run(&self) -> Result<(), RunGroupError> {
		debug!(message = "Starting worksheet", n_groups = self.groups.len());

		for group in &self.groups {
			if let Err(error) = group.run().await {
				warn!(message = "Group failed, stopping worksheet", group = ?group.name());
				return Err(error);
			}
		}

		debug!(message = "Worksheet finished");
		return Ok(());
	}
}
