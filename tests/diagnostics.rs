use result_rail::diagnostics::{
    CallFrame, CallSite, DiagnosticLine, DiagnosticPolicy, Dispatcher, FunctionKey,
    PolicyRegistry, RegistryError,
};
use result_rail::traits::ResultExt;
use result_rail::{call_site, failure, success, Outcome};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static RESETS: AtomicUsize = AtomicUsize::new(0);
static LOOKUP_ONE: AtomicUsize = AtomicUsize::new(0);
static LOOKUP_TWO: AtomicUsize = AtomicUsize::new(0);
static GUESSES: AtomicUsize = AtomicUsize::new(0);
static CLOSURE_RECOVERIES: AtomicUsize = AtomicUsize::new(0);
static TRACED_RECOVERIES: AtomicUsize = AtomicUsize::new(0);
static WITHDRAW_RECOVERIES: AtomicUsize = AtomicUsize::new(0);
static LEDGER_RECOVERIES: AtomicUsize = AtomicUsize::new(0);
static FINDER_RECOVERIES: AtomicUsize = AtomicUsize::new(0);
static NESTED_RECOVERIES: AtomicUsize = AtomicUsize::new(0);

static INSTALL: Once = Once::new();

fn install_registry() {
    INSTALL.call_once(|| {
        let scope = module_path!();
        let account = format!("{scope}::Account");
        let ledger = format!("{scope}::Ledger");
        let nested = format!("{scope}::nested_functions_use_enclosing_function_scope");
        PolicyRegistry::new()
            .declare(
                FunctionKey::new(scope, "divide", 2),
                DiagnosticPolicy::new().log_failures(true).recover_with("reset"),
            )
            .declare(FunctionKey::new(scope, "find_by_id", 1), DiagnosticPolicy::logged())
            .declare(
                FunctionKey::new(scope, "lookup", 1),
                DiagnosticPolicy::new().recover_with("on_lookup_one"),
            )
            .declare(
                FunctionKey::new(scope, "lookup", 2),
                DiagnosticPolicy::new().recover_with("on_lookup_two"),
            )
            .declare(
                FunctionKey::new(scope, "guess", 3),
                DiagnosticPolicy::new().recover_with("on_guess"),
            )
            .declare(
                FunctionKey::new(scope, "explode", 0),
                DiagnosticPolicy::logged().recover_with("panicking_recovery"),
            )
            .declare(
                FunctionKey::new(scope, "orphan", 0),
                DiagnosticPolicy::logged().recover_with("never_declared"),
            )
            .declare(
                FunctionKey::new(scope, "in_closure", 1),
                DiagnosticPolicy::new().recover_with("on_closure"),
            )
            .declare(
                FunctionKey::new(scope, "read_limit", 1),
                DiagnosticPolicy::new().log_failures(true).recover_with("on_traced"),
            )
            .recovery(scope, "reset", || {
                RESETS.fetch_add(1, Ordering::SeqCst);
            })
            .recovery(scope, "on_lookup_one", || {
                LOOKUP_ONE.fetch_add(1, Ordering::SeqCst);
            })
            .recovery(scope, "on_lookup_two", || {
                LOOKUP_TWO.fetch_add(1, Ordering::SeqCst);
            })
            .recovery(scope, "on_guess", || {
                GUESSES.fetch_add(1, Ordering::SeqCst);
            })
            .recovery(scope, "panicking_recovery", || panic!("recovery blew up"))
            .recovery(scope, "on_closure", || {
                CLOSURE_RECOVERIES.fetch_add(1, Ordering::SeqCst);
            })
            .recovery(scope, "on_traced", || {
                TRACED_RECOVERIES.fetch_add(1, Ordering::SeqCst);
            })
            .declare(
                FunctionKey::new(account.clone(), "withdraw", 1),
                DiagnosticPolicy::new().log_failures(true).recover_with("on_withdraw"),
            )
            .declare(
                FunctionKey::new(account.clone(), "find", 1),
                DiagnosticPolicy::new().recover_with("on_find"),
            )
            .recovery(account.clone(), "on_withdraw", || {
                WITHDRAW_RECOVERIES.fetch_add(1, Ordering::SeqCst);
            })
            .recovery(account, "on_find", || {
                FINDER_RECOVERIES.fetch_add(1, Ordering::SeqCst);
            })
            .declare(
                FunctionKey::new(ledger.clone(), "latest", 0),
                DiagnosticPolicy::new().recover_with("on_empty"),
            )
            .recovery(ledger, "on_empty", || {
                LEDGER_RECOVERIES.fetch_add(1, Ordering::SeqCst);
            })
            .declare(
                FunctionKey::new(nested.clone(), "inner", 0),
                DiagnosticPolicy::new().recover_with("on_inner"),
            )
            .recovery(nested, "on_inner", || {
                NESTED_RECOVERIES.fetch_add(1, Ordering::SeqCst);
            })
            .install()
            .expect("first install succeeds");
    });
}

fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
    if b == 0 {
        return failure!("Division by zero", arity = 2);
    }
    success!(a / b, arity = 2)
}

fn find_by_id(id: u32) -> Outcome<&'static str, &'static str> {
    match id {
        1 => success!("Alice", arity = 1),
        _ => failure!("User not found", arity = 1),
    }
}

fn lookup_one(key: &str) -> Outcome<u32, String> {
    let site = CallSite::new(CallFrame::new(module_path!(), "lookup", line!(), Some(1)));
    site.failure(format!("no entry for {key}"))
}

fn lookup_two(key: &str, default: u32) -> Outcome<u32, String> {
    let site = CallSite::new(CallFrame::new(module_path!(), "lookup", line!(), Some(2)));
    if key.is_empty() {
        site.failure("empty key".to_string())
    } else {
        site.success(default)
    }
}

fn guess(_a: u8, _b: u8, _c: u8) -> Outcome<u8, &'static str> {
    failure!("wrong guess")
}

fn explode() -> Outcome<u8, &'static str> {
    failure!("boom", arity = 0)
}

fn orphan() -> Outcome<u8, &'static str> {
    failure!("abandoned", arity = 0)
}

fn in_closure(values: &[i32]) -> Outcome<i32, &'static str> {
    let checked = |v: i32| -> Outcome<i32, &'static str> {
        if v < 0 {
            failure!("negative", arity = 1)
        } else {
            success!(v, arity = 1)
        }
    };
    values.iter().map(|v| checked(*v)).collect::<Outcome<Vec<_>, _>>().map(|v| v.iter().sum())
}

fn read_limit(raw: &str) -> Outcome<u32, std::num::ParseIntError> {
    raw.parse::<u32>().traced(&call_site!(arity = 1))
}

struct Account {
    balance: u32,
}

impl Account {
    fn withdraw(&self, amount: u32) -> Outcome<u32, &'static str> {
        if amount > self.balance {
            return failure!("insufficient funds", arity = 1);
        }
        success!(self.balance - amount, arity = 1)
    }
}

trait Finder {
    fn find(&self, id: u32) -> Outcome<u32, &'static str>;
}

impl Finder for Account {
    fn find(&self, id: u32) -> Outcome<u32, &'static str> {
        if id == 0 {
            failure!("no such account", arity = 1)
        } else {
            success!(self.balance, arity = 1)
        }
    }
}

struct Ledger<T> {
    entries: Vec<T>,
}

impl<T: Copy + std::fmt::Display> Ledger<T> {
    fn latest(&self) -> Outcome<T, &'static str> {
        match self.entries.last() {
            Some(entry) => success!(*entry, arity = 0),
            None => failure!("empty ledger", arity = 0),
        }
    }
}

#[test]
fn second_install_is_rejected() {
    install_registry();
    assert!(PolicyRegistry::installed().is_some());
    assert_eq!(PolicyRegistry::new().install(), Err(RegistryError::AlreadyInstalled));
}

#[test]
fn divide_recovers_only_on_failure() {
    install_registry();

    assert_eq!(divide(10, 2), Outcome::success(5));
    assert_eq!(RESETS.load(Ordering::SeqCst), 0);

    assert_eq!(divide(10, 0), Outcome::failure("Division by zero"));
    assert_eq!(RESETS.load(Ordering::SeqCst), 1);

    assert_eq!(divide(1, 0), Outcome::failure("Division by zero"));
    assert_eq!(RESETS.load(Ordering::SeqCst), 2);
}

#[test]
fn logged_function_returns_outcomes_unchanged() {
    install_registry();
    assert_eq!(find_by_id(1), Outcome::success("Alice"));
    assert_eq!(find_by_id(7), Outcome::failure("User not found"));
}

#[test]
fn overloads_resolve_by_declared_arity() {
    install_registry();

    assert!(lookup_one("a").is_failure());
    assert_eq!(LOOKUP_ONE.load(Ordering::SeqCst), 1);
    assert_eq!(LOOKUP_TWO.load(Ordering::SeqCst), 0);

    assert!(lookup_two("", 3).is_failure());
    assert_eq!(LOOKUP_ONE.load(Ordering::SeqCst), 1);
    assert_eq!(LOOKUP_TWO.load(Ordering::SeqCst), 1);

    assert_eq!(lookup_two("k", 3), Outcome::success(3));
    assert_eq!(LOOKUP_TWO.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_arity_matches_any_declaration() {
    install_registry();
    assert_eq!(guess(1, 2, 3), Outcome::failure("wrong guess"));
    assert_eq!(GUESSES.load(Ordering::SeqCst), 1);
}

#[test]
fn panicking_recovery_does_not_escape() {
    install_registry();
    assert_eq!(explode(), Outcome::failure("boom"));
}

#[test]
fn missing_recovery_is_ignored() {
    install_registry();
    assert_eq!(orphan(), Outcome::failure("abandoned"));
}

#[test]
fn closures_are_attributed_to_enclosing_function() {
    install_registry();

    assert_eq!(in_closure(&[1, 2, 3]), Outcome::success(6));
    assert_eq!(CLOSURE_RECOVERIES.load(Ordering::SeqCst), 0);

    assert_eq!(in_closure(&[1, -2, 3]), Outcome::failure("negative"));
    assert_eq!(CLOSURE_RECOVERIES.load(Ordering::SeqCst), 1);
}

#[test]
fn traced_results_dispatch_like_constructed_outcomes() {
    install_registry();

    assert_eq!(read_limit("10"), Outcome::success(10));
    assert_eq!(TRACED_RECOVERIES.load(Ordering::SeqCst), 0);

    assert!(read_limit("ten").is_failure());
    assert_eq!(TRACED_RECOVERIES.load(Ordering::SeqCst), 1);
}

#[test]
fn undeclared_functions_behave_like_plain_constructors() {
    install_registry();

    fn untracked() -> Outcome<i32, &'static str> {
        failure!("plain")
    }

    assert_eq!(untracked(), Outcome::failure("plain"));
}

#[test]
fn call_site_captures_function_and_line() {
    let expected_line = line!() + 1;
    let site = call_site!(arity = 0);

    assert_eq!(site.frame().function(), "call_site_captures_function_and_line");
    assert_eq!(site.frame().scope(), module_path!());
    assert_eq!(site.frame().line(), expected_line);
    assert_eq!(site.frame().arity(), Some(0));

    let unknown = call_site!();
    assert_eq!(unknown.frame().arity(), None);
}

#[test]
fn explicit_dispatcher_uses_its_own_registry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let registry = PolicyRegistry::new()
        .declare(
            FunctionKey::new("billing::invoices", "charge", 1),
            DiagnosticPolicy::new().recover_with("refund"),
        )
        .recovery("billing::invoices", "refund", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    let dispatcher = Dispatcher::new(&registry);

    let site = CallSite::new(CallFrame::new("billing::invoices", "charge", 42, Some(1)));
    let ok = site.observe_with(&dispatcher, Outcome::<u32, &str>::success(100));
    assert_eq!(ok, Outcome::success(100));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let err = site.observe_with(&dispatcher, Outcome::<u32, &str>::failure("card declined"));
    assert_eq!(err, Outcome::failure("card declined"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let other_arity = CallSite::new(CallFrame::new("billing::invoices", "charge", 43, Some(2)));
    let _ = other_arity.observe_with(&dispatcher, Outcome::<u32, &str>::failure("card declined"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn diagnostic_line_format() {
    let frame = CallFrame::new("app::math", "divide", 17, Some(2));

    let failure = Outcome::<i32, &str>::failure("Division by zero");
    assert_eq!(
        DiagnosticLine::new(&frame, &failure).to_string(),
        "[17] divide() -> Failure(Division by zero)"
    );

    let success = Outcome::<i32, &str>::success(5);
    assert_eq!(DiagnosticLine::new(&frame, &success).to_string(), "[17] divide() -> Success(5)");
}

#[test]
fn registry_reports_declarations() {
    let registry = PolicyRegistry::new()
        .declare(FunctionKey::new("app", "a", 0), DiagnosticPolicy::logged())
        .declare(FunctionKey::new("app", "a", 0), DiagnosticPolicy::new())
        .declare(FunctionKey::new("app", "b", 1), DiagnosticPolicy::new().log_failures(true));

    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
    assert_eq!(
        registry.policy(&FunctionKey::new("app", "a", 0)),
        Some(&DiagnosticPolicy::new())
    );
    assert_eq!(registry.policy(&FunctionKey::new("other", "a", 0)), None);
    assert!(PolicyRegistry::new().is_empty());
}

#[test]
fn policy_builders() {
    let policy = DiagnosticPolicy::default();
    assert_eq!(policy, DiagnosticPolicy::new());
    assert!(!policy.should_log(result_rail::Variant::Success));
    assert!(!policy.should_log(result_rail::Variant::Failure));
    assert_eq!(policy.recovery_target(), None);

    let verbose = DiagnosticPolicy::logged().log_failures(false);
    assert!(verbose.should_log(result_rail::Variant::Success));
    assert!(!verbose.should_log(result_rail::Variant::Failure));
}

#[test]
fn inherent_method_resolves_under_type_path() {
    install_registry();
    let account = Account { balance: 50 };

    assert_eq!(account.withdraw(20), Outcome::success(30));
    assert_eq!(WITHDRAW_RECOVERIES.load(Ordering::SeqCst), 0);

    assert_eq!(account.withdraw(80), Outcome::failure("insufficient funds"));
    assert_eq!(WITHDRAW_RECOVERIES.load(Ordering::SeqCst), 1);
}

#[test]
fn trait_impl_method_resolves_under_implementing_type() {
    install_registry();
    let account = Account { balance: 50 };

    assert_eq!(account.find(3), Outcome::success(50));
    assert_eq!(account.find(0), Outcome::failure("no such account"));
    assert_eq!(FINDER_RECOVERIES.load(Ordering::SeqCst), 1);
}

#[test]
fn generic_impl_method_resolves_without_type_arguments() {
    install_registry();

    let filled = Ledger { entries: vec![1u64, 2, 3] };
    assert_eq!(filled.latest(), Outcome::success(3));
    assert_eq!(LEDGER_RECOVERIES.load(Ordering::SeqCst), 0);

    let empty: Ledger<u64> = Ledger { entries: Vec::new() };
    assert_eq!(empty.latest(), Outcome::failure("empty ledger"));
    assert_eq!(LEDGER_RECOVERIES.load(Ordering::SeqCst), 1);
}

#[test]
fn nested_functions_use_enclosing_function_scope() {
    install_registry();

    fn inner() -> Outcome<u8, &'static str> {
        let site = call_site!(arity = 0);
        assert_eq!(
            site.frame().scope(),
            concat!(module_path!(), "::nested_functions_use_enclosing_function_scope")
        );
        site.failure("nested")
    }

    assert_eq!(inner(), Outcome::failure("nested"));
    assert_eq!(NESTED_RECOVERIES.load(Ordering::SeqCst), 1);
}
