#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use minicatalog::polling::use_polling;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_polling_ticks_until_owner_is_disposed() {
    let runtime = create_runtime();
    let ticks = Rc::new(Cell::new(0u32));

    let start = {
        let ticks = ticks.clone();
        as_child_of_current_owner(move |period: Duration| {
            let ticks = ticks.clone();
            use_polling("test", period, move || ticks.set(ticks.get() + 1));
        })
    };
    let ((), disposer) = start(Duration::from_millis(40));
    assert_eq!(ticks.get(), 1, "the first fetch happens on mount");

    sleep(Duration::from_millis(180)).await;
    let while_mounted = ticks.get();
    assert!(
        while_mounted >= 3,
        "expected the interval to keep firing, got {while_mounted} ticks"
    );

    drop(disposer);
    sleep(Duration::from_millis(160)).await;
    assert_eq!(ticks.get(), while_mounted, "timer kept firing after teardown");

    runtime.dispose();
}

#[wasm_bindgen_test]
async fn test_each_owner_gets_its_own_timer() {
    let runtime = create_runtime();
    let first = Rc::new(Cell::new(0u32));
    let second = Rc::new(Cell::new(0u32));

    let mount = |ticks: Rc<Cell<u32>>| {
        as_child_of_current_owner(move |_: ()| {
            let ticks = ticks.clone();
            use_polling("test", Duration::from_millis(30), move || ticks.set(ticks.get() + 1));
        })(())
    };
    let ((), first_disposer) = mount(first.clone());
    let ((), second_disposer) = mount(second.clone());

    drop(first_disposer);
    let stopped_at = first.get();
    sleep(Duration::from_millis(120)).await;

    assert_eq!(first.get(), stopped_at);
    assert!(second.get() > 1);

    drop(second_disposer);
    runtime.dispose();
}
