//! Scripted in-memory driver
//!
//! `MockDriver` keeps a tiny DOM of [`MockNode`]s, answers every port with
//! it and records each primitive call in order so tests can assert exactly
//! which remote commands an action issued.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use selectkit_core_types::{DriverError, ElementId, Selector, SelectorChain, Using};

use crate::ports::{ElementHandle, ElementList, ElementResolver, PointerSession};
use crate::query::normalize_text;
use crate::selection::{PointerOffset, Selection};

/// A primitive call observed by the mock, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Resolve(SelectorChain),
    Click(ElementId),
    Clear(ElementId),
    SetValue(ElementId, String),
    Attribute(ElementId, String),
    IsSelected(ElementId),
    Submit(ElementId),
    FindWithin(ElementId, Selector),
    MoveTo(ElementId, Option<PointerOffset>),
    DoubleClick,
}

/// Primitive kinds that can be scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Click,
    Clear,
    SetValue,
    Attribute,
    IsSelected,
    Submit,
    FindWithin,
    MoveTo,
    DoubleClick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockNode {
    pub tag: String,
    pub text: String,
    pub attributes: HashMap<String, String>,
    pub selected: bool,
    pub value: String,
    pub children: Vec<ElementId>,
    pub submitted: bool,
}

impl MockNode {
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn input(input_type: &str) -> Self {
        Self::element("input").with_attribute("type", input_type)
    }

    pub fn checkbox(checked: bool) -> Self {
        Self::input("checkbox").with_selected(checked)
    }

    pub fn option(text: &str) -> Self {
        Self::element("option").with_text(text)
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_children(mut self, children: Vec<ElementId>) -> Self {
        self.children = children;
        self
    }

    fn is_checkbox(&self) -> bool {
        self.tag == "input"
            && self.attributes.get("type").map(String::as_str) == Some("checkbox")
    }
}

#[derive(Default)]
struct MockState {
    nodes: HashMap<ElementId, MockNode>,
    matches: Vec<ElementId>,
    resolve_error: Option<DriverError>,
    failures: HashMap<(Option<ElementId>, Primitive), DriverError>,
    calls: Vec<Call>,
}

impl MockState {
    fn record(
        &mut self,
        call: Call,
        target: Option<&ElementId>,
        primitive: Primitive,
    ) -> Result<(), DriverError> {
        self.calls.push(call);
        if let Some(err) = self.failures.get(&(target.cloned(), primitive)) {
            return Err(err.clone());
        }
        Ok(())
    }

    fn node_mut(&mut self, id: &ElementId) -> Result<&mut MockNode, DriverError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| DriverError::StaleElement(id.clone()))
    }
}

/// In-memory resolver, element factory and pointer session.
#[derive(Clone, Default)]
pub struct MockDriver {
    state: Arc<Mutex<MockState>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node and return its id.
    pub fn add(&self, id: &str, node: MockNode) -> ElementId {
        let id = ElementId::from(id);
        self.state.lock().nodes.insert(id.clone(), node);
        id
    }

    /// Detach a node; later calls on its handles fail as stale.
    pub fn remove(&self, id: &ElementId) {
        self.state.lock().nodes.remove(id);
    }

    /// Elements returned, in order, for any selector chain.
    pub fn set_matches(&self, ids: Vec<ElementId>) {
        self.state.lock().matches = ids;
    }

    pub fn fail_resolution(&self, err: DriverError) {
        self.state.lock().resolve_error = Some(err);
    }

    /// Make `primitive` fail on element `id`.
    pub fn fail(&self, id: &ElementId, primitive: Primitive, err: DriverError) {
        self.state
            .lock()
            .failures
            .insert((Some(id.clone()), primitive), err);
    }

    /// Make a session-level primitive fail regardless of target.
    pub fn fail_session(&self, primitive: Primitive, err: DriverError) {
        self.state.lock().failures.insert((None, primitive), err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Calls other than selection resolution.
    pub fn primitive_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::Resolve(_)))
            .collect()
    }

    /// Ids of clicked elements, in click order.
    pub fn clicks(&self) -> Vec<ElementId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Click(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn node(&self, id: &ElementId) -> Option<MockNode> {
        self.state.lock().nodes.get(id).cloned()
    }

    pub fn selection(&self, chain: SelectorChain) -> Selection {
        Selection::from_driver(chain, Arc::new(self.clone()))
    }

    fn handle(&self, id: ElementId) -> Box<dyn ElementHandle> {
        Box::new(MockElement {
            id,
            state: self.state.clone(),
        })
    }

    fn handles(&self, ids: Vec<ElementId>) -> ElementList {
        ids.into_iter().map(|id| self.handle(id)).collect()
    }
}

#[async_trait]
impl ElementResolver for MockDriver {
    async fn resolve(&self, chain: &SelectorChain) -> Result<ElementList, DriverError> {
        let ids = {
            let mut state = self.state.lock();
            state.calls.push(Call::Resolve(chain.clone()));
            if let Some(err) = state.resolve_error.clone() {
                return Err(err);
            }
            state.matches.clone()
        };
        Ok(self.handles(ids))
    }
}

#[async_trait]
impl PointerSession for MockDriver {
    async fn move_to(
        &self,
        element: &dyn ElementHandle,
        offset: Option<PointerOffset>,
    ) -> Result<(), DriverError> {
        let id = element.id().clone();
        let mut state = self.state.lock();
        state.calls.push(Call::MoveTo(id.clone(), offset));
        for key in [(Some(id), Primitive::MoveTo), (None, Primitive::MoveTo)] {
            if let Some(err) = state.failures.get(&key) {
                return Err(err.clone());
            }
        }
        Ok(())
    }

    async fn double_click(&self) -> Result<(), DriverError> {
        self.state
            .lock()
            .record(Call::DoubleClick, None, Primitive::DoubleClick)
    }
}

struct MockElement {
    id: ElementId,
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl ElementHandle for MockElement {
    fn id(&self) -> &ElementId {
        &self.id
    }

    async fn click(&self) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        state.record(Call::Click(self.id.clone()), Some(&self.id), Primitive::Click)?;
        let node = state.node_mut(&self.id)?;
        if node.is_checkbox() {
            node.selected = !node.selected;
        } else if node.tag == "option" {
            node.selected = true;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        state.record(Call::Clear(self.id.clone()), Some(&self.id), Primitive::Clear)?;
        state.node_mut(&self.id)?.value.clear();
        Ok(())
    }

    async fn set_value(&self, text: &str) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        state.record(
            Call::SetValue(self.id.clone(), text.to_string()),
            Some(&self.id),
            Primitive::SetValue,
        )?;
        state.node_mut(&self.id)?.value = text.to_string();
        Ok(())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError> {
        let mut state = self.state.lock();
        state.record(
            Call::Attribute(self.id.clone(), name.to_string()),
            Some(&self.id),
            Primitive::Attribute,
        )?;
        Ok(state.node_mut(&self.id)?.attributes.get(name).cloned())
    }

    async fn is_selected(&self) -> Result<bool, DriverError> {
        let mut state = self.state.lock();
        state.record(
            Call::IsSelected(self.id.clone()),
            Some(&self.id),
            Primitive::IsSelected,
        )?;
        Ok(state.node_mut(&self.id)?.selected)
    }

    async fn submit(&self) -> Result<(), DriverError> {
        let mut state = self.state.lock();
        state.record(Call::Submit(self.id.clone()), Some(&self.id), Primitive::Submit)?;
        state.node_mut(&self.id)?.submitted = true;
        Ok(())
    }

    async fn find_within(&self, selector: &Selector) -> Result<ElementList, DriverError> {
        let matched: Vec<ElementId> = {
            let mut state = self.state.lock();
            state.record(
                Call::FindWithin(self.id.clone(), selector.clone()),
                Some(&self.id),
                Primitive::FindWithin,
            )?;
            let children = state.node_mut(&self.id)?.children.clone();
            // Anything but the option-by-text query matches nothing.
            let Some(wanted) = parse_option_query(selector) else {
                return Ok(Vec::new());
            };
            children
                .into_iter()
                .filter(|child| {
                    state.nodes.get(child).map_or(false, |node| {
                        node.tag == "option" && normalize_text(&node.text) == wanted
                    })
                })
                .collect()
        };
        Ok(matched
            .into_iter()
            .map(|id| {
                Box::new(MockElement {
                    id,
                    state: self.state.clone(),
                }) as Box<dyn ElementHandle>
            })
            .collect())
    }
}

const OPTION_QUERY_PREFIX: &str = "./option[normalize-space(text())=";

/// Recover the option text from `./option[normalize-space(text())=LIT]`.
fn parse_option_query(selector: &Selector) -> Option<String> {
    if selector.using != Using::XPath {
        return None;
    }
    let literal = selector
        .value
        .strip_prefix(OPTION_QUERY_PREFIX)?
        .strip_suffix(']')?;
    parse_xpath_literal(literal)
}

/// Evaluate a quoted XPath string literal or a `concat()` of literals.
fn parse_xpath_literal(expr: &str) -> Option<String> {
    let Some(args) = expr
        .strip_prefix("concat(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        let (text, rest) = split_quoted(expr)?;
        return rest.is_empty().then(|| text.to_string());
    };

    let mut out = String::new();
    let mut rest = args.trim_start();
    loop {
        let (text, tail) = split_quoted(rest)?;
        out.push_str(text);
        rest = tail.trim_start();
        match rest.strip_prefix(',') {
            Some(next) => rest = next.trim_start(),
            None if rest.is_empty() => return Some(out),
            None => return None,
        }
    }
}

fn split_quoted(expr: &str) -> Option<(&str, &str)> {
    let quote = expr.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = &expr[1..];
    let end = body.find(quote)?;
    Some((&body[..end], &body[end + 1..]))
}
