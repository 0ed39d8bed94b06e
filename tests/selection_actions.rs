use selection_actions::mock::{Call, MockDriver, MockNode, Primitive};
use selectkit::{
    ActionError, ActionOptions, DriverError, ElementId, ErrorKind, PointerOffset, Selection,
    SelectionActions, Selector, SelectorChain, Step,
};

fn select_css(driver: &MockDriver, css: &str) -> Selection {
    driver.selection(SelectorChain::single(Selector::css(css)))
}

fn add_links(driver: &MockDriver, count: usize) -> Vec<ElementId> {
    let ids: Vec<ElementId> = (1..=count)
        .map(|n| driver.add(&format!("e{}", n), MockNode::element("a")))
        .collect();
    driver.set_matches(ids.clone());
    ids
}

#[tokio::test]
async fn check_on_checked_box_issues_no_click() {
    let driver = MockDriver::new();
    let id = driver.add("box", MockNode::checkbox(true));
    driver.set_matches(vec![id.clone()]);

    select_css(&driver, "#remember").check().await.unwrap();

    assert!(driver.clicks().is_empty());
    assert!(driver.node(&id).unwrap().selected);
}

#[tokio::test]
async fn check_on_unchecked_box_clicks_once() {
    let driver = MockDriver::new();
    let id = driver.add("box", MockNode::checkbox(false));
    driver.set_matches(vec![id.clone()]);

    select_css(&driver, "#remember").check().await.unwrap();

    assert_eq!(
        driver.primitive_calls(),
        vec![
            Call::Attribute(id.clone(), "type".into()),
            Call::IsSelected(id.clone()),
            Call::Click(id.clone()),
        ]
    );
    assert!(driver.node(&id).unwrap().selected);

    // Second check is a no-op.
    select_css(&driver, "#remember").check().await.unwrap();
    assert_eq!(driver.clicks(), vec![id]);
}

#[tokio::test]
async fn empty_selection_is_a_no_op() {
    let driver = MockDriver::new();
    let selection = select_css(&driver, ".nothing");

    selection.click().await.unwrap();
    selection.double_click().await.unwrap();
    selection.fill("hello").await.unwrap();
    selection.check().await.unwrap();
    selection.uncheck().await.unwrap();
    selection.select("A").await.unwrap();
    selection.submit().await.unwrap();

    assert!(driver.primitive_calls().is_empty());
}

#[tokio::test]
async fn select_clicks_every_matching_option_in_order() {
    let driver = MockDriver::new();
    let first = driver.add("o1", MockNode::option("A"));
    let other = driver.add("o2", MockNode::option("B"));
    let second = driver.add("o3", MockNode::option(" A "));
    let parent = driver.add(
        "letters",
        MockNode::element("select")
            .with_attribute("multiple", "")
            .with_children(vec![first.clone(), other.clone(), second.clone()]),
    );
    driver.set_matches(vec![parent]);

    select_css(&driver, "#letters").select("A").await.unwrap();

    assert_eq!(driver.clicks(), vec![first.clone(), second.clone()]);
    assert!(driver.node(&first).unwrap().selected);
    assert!(!driver.node(&other).unwrap().selected);
    assert!(driver.node(&second).unwrap().selected);
}

#[tokio::test]
async fn select_without_matching_option_fails() {
    let driver = MockDriver::new();
    let option = driver.add("o1", MockNode::option("A"));
    let parent = driver.add(
        "letters",
        MockNode::element("select").with_children(vec![option]),
    );
    driver.set_matches(vec![parent]);

    let err = select_css(&driver, "#letters").select("Z").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoMatch);
    assert_eq!(
        err.to_string(),
        "no options with text \"Z\" found for some 'CSS: #letters'"
    );
    assert!(driver.clicks().is_empty());
}

#[tokio::test]
async fn failure_short_circuits_remaining_elements() {
    let driver = MockDriver::new();
    let ids = add_links(&driver, 3);
    driver.fail(&ids[1], Primitive::Click, DriverError::new("element not interactable"));

    let err = select_css(&driver, "a").click().await.unwrap_err();

    assert_eq!(driver.clicks(), vec![ids[0].clone(), ids[1].clone()]);
    assert_eq!(err.step(), Some(&Step::Click));
    assert_eq!(
        err.to_string(),
        "failed to click on 'CSS: a': element not interactable"
    );
}

#[tokio::test]
async fn check_rejects_radio_button() {
    let driver = MockDriver::new();
    let id = driver.add("choice", MockNode::input("radio"));
    driver.set_matches(vec![id]);

    let err = select_css(&driver, "#choice").check().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "'CSS: #choice' does not refer to a checkbox");
    assert!(driver.clicks().is_empty());
}

#[tokio::test]
async fn click_hits_every_link_in_order() {
    let driver = MockDriver::new();
    let ids = add_links(&driver, 3);

    select_css(&driver, "a").click().await.unwrap();

    assert_eq!(driver.clicks(), ids);
}

#[tokio::test]
async fn fill_clears_then_enters_text() {
    let driver = MockDriver::new();
    let id = driver.add("name", MockNode::input("text").with_value("old"));
    driver.set_matches(vec![id.clone()]);

    select_css(&driver, "#name").fill("Ada").await.unwrap();

    assert_eq!(
        driver.primitive_calls(),
        vec![Call::Clear(id.clone()), Call::SetValue(id.clone(), "Ada".into())]
    );
    assert_eq!(driver.node(&id).unwrap().value, "Ada");
}

#[tokio::test]
async fn fill_leaves_field_cleared_when_entry_fails() {
    let driver = MockDriver::new();
    let id = driver.add("name", MockNode::input("text").with_value("old"));
    driver.set_matches(vec![id.clone()]);
    driver.fail(&id, Primitive::SetValue, DriverError::new("read-only"));

    let err = select_css(&driver, "#name").fill("Ada").await.unwrap_err();

    assert_eq!(err.to_string(), "failed to enter text into 'CSS: #name': read-only");
    assert_eq!(driver.node(&id).unwrap().value, "");
}

#[tokio::test]
async fn double_click_moves_pointer_before_each_click() {
    let driver = MockDriver::new();
    let ids = add_links(&driver, 2);

    select_css(&driver, "a").double_click().await.unwrap();

    assert_eq!(
        driver.primitive_calls(),
        vec![
            Call::MoveTo(ids[0].clone(), None),
            Call::DoubleClick,
            Call::MoveTo(ids[1].clone(), None),
            Call::DoubleClick,
        ]
    );
}

#[tokio::test]
async fn double_click_uses_configured_offset() {
    let driver = MockDriver::new();
    let ids = add_links(&driver, 1);
    let options = ActionOptions {
        pointer_offset: Some(PointerOffset::new(4, -2)),
    };

    select_css(&driver, "a")
        .with_options(options)
        .double_click()
        .await
        .unwrap();

    assert_eq!(
        driver.primitive_calls().first(),
        Some(&Call::MoveTo(ids[0].clone(), Some(PointerOffset::new(4, -2))))
    );
}

#[tokio::test]
async fn double_click_stops_when_pointer_move_fails() {
    let driver = MockDriver::new();
    add_links(&driver, 2);
    driver.fail_session(Primitive::MoveTo, DriverError::new("out of bounds"));

    let err = select_css(&driver, "a").double_click().await.unwrap_err();

    assert_eq!(err.to_string(), "failed to move mouse to 'CSS: a': out of bounds");
    assert!(!driver.primitive_calls().contains(&Call::DoubleClick));
    assert_eq!(driver.primitive_calls().len(), 1);
}

#[tokio::test]
async fn double_click_failure_leaves_later_links_untouched() {
    let driver = MockDriver::new();
    let ids = add_links(&driver, 2);
    driver.fail_session(Primitive::DoubleClick, DriverError::new("pointer busy"));

    let err = select_css(&driver, "a").double_click().await.unwrap_err();

    assert_eq!(err.step(), Some(&Step::DoubleClick));
    assert_eq!(err.to_string(), "failed to double-click on 'CSS: a': pointer busy");
    assert_eq!(
        driver.primitive_calls(),
        vec![Call::MoveTo(ids[0].clone(), None), Call::DoubleClick]
    );
}

#[tokio::test]
async fn check_reports_unreadable_type() {
    let driver = MockDriver::new();
    let id = driver.add("box", MockNode::checkbox(false));
    driver.set_matches(vec![id.clone()]);
    driver.fail(&id, Primitive::Attribute, DriverError::new("detached"));

    let err = select_css(&driver, "#remember").check().await.unwrap_err();

    assert_eq!(err.step(), Some(&Step::ReadType));
    assert_eq!(
        err.to_string(),
        "failed to retrieve type of 'CSS: #remember': detached"
    );
    assert_eq!(
        driver.primitive_calls(),
        vec![Call::Attribute(id, "type".into())]
    );
}

#[tokio::test]
async fn check_reports_failed_toggle() {
    let driver = MockDriver::new();
    let id = driver.add("box", MockNode::checkbox(false));
    driver.set_matches(vec![id.clone()]);
    driver.fail(&id, Primitive::Click, DriverError::new("obscured"));

    let err = select_css(&driver, "#remember").check().await.unwrap_err();

    assert_eq!(err.step(), Some(&Step::Click));
    assert_eq!(err.to_string(), "failed to click on 'CSS: #remember': obscured");
    assert!(!driver.node(&id).unwrap().selected);
}

#[tokio::test]
async fn fill_skips_entry_when_clear_fails() {
    let driver = MockDriver::new();
    let id = driver.add("name", MockNode::input("text").with_value("old"));
    driver.set_matches(vec![id.clone()]);
    driver.fail(&id, Primitive::Clear, DriverError::new("not editable"));

    let err = select_css(&driver, "#name").fill("Ada").await.unwrap_err();

    assert_eq!(err.step(), Some(&Step::Clear));
    assert_eq!(err.to_string(), "failed to clear 'CSS: #name': not editable");
    assert_eq!(driver.primitive_calls(), vec![Call::Clear(id.clone())]);
    assert_eq!(driver.node(&id).unwrap().value, "old");
}

#[tokio::test]
async fn submit_reports_failure_with_selection() {
    let driver = MockDriver::new();
    let form = driver.add("form", MockNode::element("form"));
    driver.set_matches(vec![form.clone()]);

    select_css(&driver, "form").submit().await.unwrap();
    assert!(driver.node(&form).unwrap().submitted);

    driver.fail(&form, Primitive::Submit, DriverError::new("no form owner"));
    let err = select_css(&driver, "form").submit().await.unwrap_err();
    assert_eq!(err.to_string(), "failed to submit 'CSS: form': no form owner");
}

#[tokio::test]
async fn stale_handle_surfaces_driver_error() {
    let driver = MockDriver::new();
    let ids = add_links(&driver, 2);
    driver.remove(&ids[0]);

    let err = select_css(&driver, "a").click().await.unwrap_err();

    assert!(matches!(
        err,
        ActionError::Primitive {
            source: DriverError::StaleElement(ref id),
            ..
        } if *id == ids[0]
    ));
}

#[tokio::test]
async fn chained_selection_is_described_in_errors() {
    let driver = MockDriver::new();
    driver.fail_resolution(DriverError::new("session deleted"));
    let chain = SelectorChain::single(Selector::css("#cart")).then(Selector::xpath(".//button"));

    let err = driver.selection(chain).click().await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to select 'CSS: #cart | XPath: .//button': session deleted"
    );
    assert_eq!(err.selection(), "CSS: #cart | XPath: .//button");
}
