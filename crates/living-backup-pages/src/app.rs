//! WASM entry points
//!
//! ```javascript
//! import init, { mountNavigation, mountTables } from "./living_backup_pages.js";
//!
//! await init();
//! // index page: links + content frame, tables inside the frame
//! mountNavigation(JSON.stringify({ download_id: "download-btn", frame_tables: { tables: [...] } }));
//! // standalone table page
//! mountTables();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget};

use crate::config::SiteConfig;
use crate::dom::{Document, WebDocument};
use crate::error::LoaderError;
use crate::loader::{ContentLoader, HttpFetcher};
use crate::logging::{info_log, warn_log};
use crate::tables::{FrameTables, SharedTablePage, TablePage, TablesConfig};

fn to_js(err: impl std::fmt::Display) -> JsValue {
	JsValue::from_str(&err.to_string())
}

fn init_panic_hook() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
}

fn current_document() -> Result<WebDocument, JsValue> {
	WebDocument::current().ok_or_else(|| JsValue::from_str("No document available"))
}

/// Attaches `handler` for the lifetime of the page
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	if target
		.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.is_err()
	{
		warn_log!("Failed to attach {} listener", event);
	}
	closure.forget();
}

/// Wires header clicks, search boxes and filter buttons to a controller
fn bind_table_page(page: &SharedTablePage<WebDocument>) {
	let (document, config) = {
		let page = page.borrow();
		(page.document().clone(), page.config().clone())
	};

	for table in &config.tables {
		let headers = page.borrow().headers(&table.table_id);
		for (column, header) in headers.into_iter().enumerate() {
			let page = Rc::clone(page);
			let table_id = table.table_id.clone();
			listen(&header, "click", move |_| {
				if let Ok(mut page) = page.try_borrow_mut() {
					page.sort(&table_id, column);
				}
			});
		}
	}

	for input_id in config.search_inputs() {
		let Some(input) = document.element_by_id(input_id) else {
			continue;
		};
		let page = Rc::clone(page);
		let input_id = input_id.to_string();
		listen(&input, "input", move |_| {
			if let Ok(mut page) = page.try_borrow_mut() {
				page.search_changed(&input_id);
			}
		});
	}

	for filter_class in config.filter_classes() {
		for button in document.elements_by_class(filter_class) {
			let page = Rc::clone(page);
			let filter_class = filter_class.to_string();
			let target = button.clone();
			listen(&button, "click", move |_| {
				if let Ok(mut page) = page.try_borrow_mut() {
					page.select_category(&filter_class, &target);
				}
			});
		}
	}
}

/// Mounts the navigation links and the content frame of an index page
///
/// `config_json` is a [`SiteConfig`] as JSON; omitted fields use defaults.
#[wasm_bindgen(js_name = mountNavigation)]
pub fn mount_navigation(config_json: Option<String>) -> Result<(), JsValue> {
	init_panic_hook();

	let config = match config_json {
		Some(json) => SiteConfig::from_json(&json).map_err(to_js)?,
		None => SiteConfig::default(),
	};
	let document = current_document()?;
	let frame_id = config.loader.frame_id.clone();
	let frame = document
		.element_by_id(&frame_id)
		.ok_or_else(|| to_js(LoaderError::MissingFrame(frame_id)))?;

	let loader = Rc::new(ContentLoader::new(
		document,
		HttpFetcher::new(),
		config.loader,
	));

	if let Some(tables_config) = config.frame_tables {
		let tables = FrameTables::with_mount_hook(tables_config, Box::new(bind_table_page));
		loader.on_frame_ready(move |ready| tables.frame_ready(ready));
	}

	{
		let loader = Rc::clone(&loader);
		listen(&frame, "load", move |_| loader.frame_loaded());
	}

	let links = loader.links();
	info_log!("Mounting navigation with {} links", links.len());
	for link in links {
		let loader = Rc::clone(&loader);
		let target = link.clone();
		listen(&link, "click", move |event| {
			event.prevent_default();
			let loader = Rc::clone(&loader);
			let link = target.clone();
			spawn_local(async move {
				let _ = loader.follow(&link).await;
			});
		});
	}

	spawn_local(async move {
		let _ = loader.load_initial().await;
	});
	Ok(())
}

/// Mounts sorting and filtering on the tables of the current page
///
/// `config_json` is a [`TablesConfig`] as JSON; without it the entities and
/// integrations tables are bound to `searchBox` and the `.filter` buttons.
#[wasm_bindgen(js_name = mountTables)]
pub fn mount_tables(config_json: Option<String>) -> Result<(), JsValue> {
	init_panic_hook();

	let config = match config_json {
		Some(json) => TablesConfig::from_json(&json).map_err(to_js)?,
		None => TablesConfig::default(),
	};
	let mut page = TablePage::new(current_document()?, config);
	page.init();

	let page = Rc::new(RefCell::new(page));
	bind_table_page(&page);
	Ok(())
}
