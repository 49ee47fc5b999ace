//! Tables rendered inside the content frame
//!
//! The frame's document is replaced on every navigation, so the controller
//! is rebuilt each time the content loader reports the frame as ready.

use std::cell::RefCell;
use std::rc::Rc;

use super::config::TablesConfig;
use super::controller::TablePage;
use crate::dom::Document;
use crate::loader::FrameReady;
use crate::logging::{debug_log, info_log};

/// Shared handle to the controller of the current frame document
pub type SharedTablePage<D> = Rc<RefCell<TablePage<D>>>;

/// Callback run after a new controller is initialised, used to attach listeners
pub type MountHook<D> = Box<dyn Fn(&SharedTablePage<D>)>;

/// Keeps a [`TablePage`] in sync with the document shown in the content frame
pub struct FrameTables<D: Document> {
	config: TablesConfig,
	current: RefCell<Option<SharedTablePage<D>>>,
	on_mount: Option<MountHook<D>>,
}

impl<D: Document> FrameTables<D> {
	/// Creates a binder without a mount hook
	pub fn new(config: TablesConfig) -> Self {
		Self {
			config,
			current: RefCell::new(None),
			on_mount: None,
		}
	}

	/// Creates a binder that calls `hook` for every new controller
	pub fn with_mount_hook(config: TablesConfig, hook: MountHook<D>) -> Self {
		Self {
			on_mount: Some(hook),
			..Self::new(config)
		}
	}

	/// Rebuilds the controller for a freshly loaded frame document
	///
	/// Documents without any configured table (raw text, unrelated pages)
	/// drop the previous controller.
	pub fn frame_ready(&self, ready: &FrameReady<D>) {
		let page = ready
			.document
			.clone()
			.map(|document| TablePage::new(document, self.config.clone()))
			.filter(TablePage::has_tables);

		let Some(mut page) = page else {
			debug_log!("Frame has no tables to bind");
			*self.current.borrow_mut() = None;
			return;
		};

		page.init();
		info_log!(
			"Bound tables in content frame ({} visible rows)",
			page.visible_count().unwrap_or(0)
		);
		let shared = Rc::new(RefCell::new(page));
		*self.current.borrow_mut() = Some(Rc::clone(&shared));
		if let Some(hook) = &self.on_mount {
			hook(&shared);
		}
	}

	/// Returns the controller of the current frame document
	pub fn current(&self) -> Option<SharedTablePage<D>> {
		self.current.borrow().clone()
	}
}
