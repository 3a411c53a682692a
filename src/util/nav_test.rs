use super::*;
use std::cell::RefCell;

#[test]
fn page_paths_are_stable() {
    assert_eq!(Page::Login.path(), "/login");
    assert_eq!(Page::Register.path(), "/register");
    assert_eq!(Page::Dashboard.path(), "/dashboard");
}

#[test]
fn closures_act_as_navigators() {
    let visited = RefCell::new(Vec::new());
    let nav = |page: Page| visited.borrow_mut().push(page);
    nav.go(Page::Dashboard);
    nav.go(Page::Login);
    assert_eq!(*visited.borrow(), vec![Page::Dashboard, Page::Login]);
}

#[test]
fn redirect_now_has_zero_delay() {
    let r = Redirect::now(Page::Dashboard);
    assert_eq!(r.page, Page::Dashboard);
    assert!(r.delay.is_zero());
}

#[test]
fn follow_redirect_navigates_to_target() {
    let visited = RefCell::new(Vec::new());
    let nav = |page: Page| visited.borrow_mut().push(page);
    futures::executor::block_on(follow_redirect(
        Redirect::after(Page::Login, Duration::from_millis(2000)),
        &nav,
    ));
    assert_eq!(*visited.borrow(), vec![Page::Login]);
}
