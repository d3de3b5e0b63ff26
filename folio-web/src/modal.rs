//! Contact modals (email, call) with copy-to-clipboard buttons.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::ModalConfig;
use folio_core::modal::{closes_on_click, CopyFlash, ModalState};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlDocument, HtmlInputElement};

use crate::clipboard;
use crate::dom::{self, FLEX};
use crate::error::DomError;

pub struct ModalController {
    name: String,
    document: HtmlDocument,
    modal: Element,
    open_button: Element,
    close_button: Element,
    copy_button: Element,
    text: HtmlInputElement,
    message: Element,
    reveal_delay_ms: u32,
    state: RefCell<ModalState>,
    flash: RefCell<CopyFlash>,
    reveal_timer: RefCell<Option<Timeout>>,
    flash_timer: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ModalController {
    /// Look up every element of the modal. All of them are required.
    pub fn mount(
        document: &Document,
        name: &str,
        config: &ModalConfig,
    ) -> anyhow::Result<Rc<Self>> {
        let html_document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| DomError::WrongType {
                id: "document".to_string(),
                expected: "HtmlDocument",
            })?;
        Ok(Rc::new(Self {
            name: name.to_string(),
            document: html_document,
            modal: dom::by_id(document, &config.modal_id)?,
            open_button: dom::by_id(document, &config.open_button_id)?,
            close_button: dom::by_id(document, &config.close_button_id)?,
            copy_button: dom::by_id(document, &config.copy_button_id)?,
            text: dom::by_id(document, &config.text_id)?,
            message: dom::by_id(document, &config.message_id)?,
            reveal_delay_ms: config.reveal_delay_ms,
            state: RefCell::new(ModalState::new()),
            flash: RefCell::new(CopyFlash::new(config.copy_flash_ms)),
            reveal_timer: RefCell::new(None),
            flash_timer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Wire the open, close and copy buttons, plus a window listener closing the
    /// modal when its backdrop is clicked.
    pub fn install(self: &Rc<Self>) -> Result<(), DomError> {
        let window = dom::window()?;
        let mut listeners = self.listeners.borrow_mut();

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.open_button, "click", move |_| {
            if let Some(this) = this.upgrade() {
                this.open();
            }
        }));

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.close_button, "click", move |_| {
            if let Some(this) = this.upgrade() {
                this.close();
            }
        }));

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.copy_button, "click", move |_| {
            if let Some(this) = this.upgrade() {
                this.copy();
            }
        }));

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&window, "click", move |event| {
            if let Some(this) = this.upgrade() {
                this.handle_window_click(event);
            }
        }));
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    /// Un-hide the modal, then apply the centering class after the reveal delay so
    /// the CSS transition sees the modal become visible first.
    pub fn open(self: &Rc<Self>) {
        let Some(ticket) = self.state.borrow_mut().open() else {
            return;
        };
        dom::set_hidden(&self.modal, false);

        let this = Rc::downgrade(self);
        let timer = Timeout::new(self.reveal_delay_ms, move || {
            if let Some(this) = this.upgrade() {
                if this.state.borrow_mut().finish_open(ticket) {
                    dom::set_class(&this.modal, FLEX, true);
                }
            }
        });
        *self.reveal_timer.borrow_mut() = Some(timer);
        log::debug!("modal {}: opened", self.name);
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        // cancels a pending reveal
        self.reveal_timer.borrow_mut().take();
        dom::set_hidden(&self.modal, true);
        dom::set_class(&self.modal, FLEX, false);
        log::debug!("modal {}: closed", self.name);
    }

    fn handle_window_click(&self, event: &Event) {
        let modal: &JsValue = self.modal.as_ref();
        let on_backdrop = event.target().is_some_and(|target| {
            let target: &JsValue = target.as_ref();
            target == modal
        });
        if closes_on_click(&self.state.borrow(), on_backdrop) {
            self.close();
        }
    }

    /// Copy the modal's text field. Failures are logged and leave the UI untouched.
    pub fn copy(self: &Rc<Self>) {
        match clipboard::copy_input(&self.document, &self.text) {
            Ok(()) => self.confirm_copy(),
            Err(err) => log::error!("Failed to copy {} text: {err}", self.name),
        }
    }

    /// Show the confirmation message and hide it again after the flash duration.
    /// A new confirmation restarts the countdown.
    pub fn confirm_copy(self: &Rc<Self>) {
        let ticket = self.flash.borrow_mut().show();
        dom::set_hidden(&self.message, false);

        let duration = self.flash.borrow().duration_ms();
        let this = Rc::downgrade(self);
        let timer = Timeout::new(duration, move || {
            if let Some(this) = this.upgrade() {
                if this.flash.borrow_mut().expire(ticket) {
                    dom::set_hidden(&this.message, true);
                }
            }
        });
        *self.flash_timer.borrow_mut() = Some(timer);
    }
}
