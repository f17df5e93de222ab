use std::any::Any;
use std::rc::Rc;
use dioxus::dioxus_core::{ ElementId, Mutation, Mutations };
use dioxus::html::{ SerializedHtmlEventConverter, SerializedKeyboardData, SerializedMouseData };
use dioxus::prelude::*;

/// Drives a `VirtualDom` with synthetic events and tracks the listeners it mounts.
pub struct EventDriver {
    dom: VirtualDom,
    listeners: Vec<(String, ElementId)>,
}

impl EventDriver {
    pub fn new(mut dom: VirtualDom) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mutations = dom.rebuild_to_vec();
        let mut driver = Self { dom, listeners: Vec::new() };
        driver.record(mutations);
        driver
    }

    /// Listener ids for `name`, in mount order.
    pub fn listeners(&self, name: &str) -> Vec<ElementId> {
        self.listeners
            .iter()
            .filter(|(event, _)| event == name)
            .map(|(_, id)| *id)
            .collect()
    }

    /// Clicks `id` and returns the click listeners mounted by the re-render.
    pub fn click(&mut self, id: ElementId) -> Vec<ElementId> {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        self.dispatch("click", data, id);
        self.flush("click")
    }

    pub fn key_down(&mut self, id: ElementId, key: Key, code: Code) {
        let data = PlatformEventData::new(
            Box::new(SerializedKeyboardData::new(key, code, Location::Standard, false, Modifiers::empty(), false))
        );
        self.dispatch("keydown", data, id);
        self.flush("keydown");
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn dispatch(&mut self, name: &str, data: PlatformEventData, id: ElementId) {
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, id);
    }

    fn flush(&mut self, name: &str) -> Vec<ElementId> {
        let mutations = self.dom.render_immediate_to_vec();
        self.record(mutations)
            .into_iter()
            .filter(|(event, _)| event == name)
            .map(|(_, id)| id)
            .collect()
    }

    fn record(&mut self, mutations: Mutations) -> Vec<(String, ElementId)> {
        let mounted: Vec<_> = mutations.edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } => Some((name, id)),
                _ => None,
            })
            .collect();
        self.listeners.extend(mounted.iter().cloned());
        mounted
    }
}
