use std::{cmp::Ordering, sync::Arc, thread};

use collection_helpers::{
    compare::{order_of, NaturalComparator, OrderOf},
    Comparator, ComparatorExt, CompareError, FunctionComparator, ReversingComparator,
};
use rand::{thread_rng, Rng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    dept: &'static str,
    age: u32,
    name: &'static str,
}

fn staff() -> Vec<Employee> {
    vec![
        Employee {
            dept: "ops",
            age: 41,
            name: "Kim",
        },
        Employee {
            dept: "eng",
            age: 29,
            name: "Ana",
        },
        Employee {
            dept: "eng",
            age: 35,
            name: "Bo",
        },
        Employee {
            dept: "ops",
            age: 29,
            name: "Cy",
        },
        Employee {
            dept: "eng",
            age: 29,
            name: "Dee",
        },
    ]
}

#[test]
fn natural_order_of_integers() {
    init_logger();
    let order = order_of::<i32>();
    assert!(order.compare(&3, &5).unwrap().is_lt());
    assert!(order.compare(&5, &3).unwrap().is_gt());
    assert!(order.compare(&3, &3).unwrap().is_eq());
}

#[test]
fn function_comparator_sorts_absent_values_last() {
    init_logger();
    let cmp = FunctionComparator::new(|a: &i32, b: &i32| a.cmp(b));
    let mut values = vec![Some(4), None, Some(1), None, Some(3)];
    values.sort_by(|a, b| cmp.compare(a, b));
    assert_eq!(values, vec![Some(1), Some(3), Some(4), None, None]);

    cmp.reversed().sort_slice(&mut values);
    assert_eq!(values, vec![None, None, Some(4), Some(3), Some(1)]);
}

#[test]
fn reversal_properties_hold_for_random_pairs() {
    init_logger();
    let mut rng = thread_rng();
    let cmp = FunctionComparator::new(|a: &i64, b: &i64| a.cmp(b));
    let reversed = ReversingComparator::new(&cmp);
    let twice = ReversingComparator::new(ReversingComparator::new(&cmp));

    for _ in 0..1000 {
        let x = rng.gen_bool(0.9).then(|| rng.gen_range(-50..50));
        let y = rng.gen_bool(0.9).then(|| rng.gen_range(-50..50));
        assert_eq!(reversed.compare(&x, &y), cmp.compare(&y, &x));
        assert_eq!(twice.compare(&x, &y), cmp.compare(&x, &y));
        assert_eq!(cmp.compare(&x, &x), Ordering::Equal);
    }
}

#[test]
fn reversing_extreme_values_does_not_overflow() {
    let cmp = ReversingComparator::new(NaturalComparator::<i32>::new());
    assert_eq!(cmp.compare(&i32::MIN, &i32::MAX), Ordering::Greater);
    assert_eq!(cmp.compare(&i32::MAX, &i32::MIN), Ordering::Less);
}

#[test]
fn chained_keys_break_ties_in_order() {
    init_logger();
    let by_dept_then_age = OrderOf::<Employee>::unordered()
        .by(|e: &Employee| e.dept)
        .by(|e: &Employee| e.age)
        .build()
        .unwrap();
    let by_age = order_of::<u32>().build().unwrap();

    let people = staff();
    for a in people.iter() {
        for b in people.iter().filter(|b| b.dept == a.dept) {
            assert_eq!(by_dept_then_age.compare(a, b), by_age.compare(&a.age, &b.age));
        }
    }

    let mut sorted = people.clone();
    by_dept_then_age
        .then_by_key(|e: &Employee| e.name)
        .sort_slice(&mut sorted);
    let names: Vec<_> = sorted.iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Ana", "Dee", "Bo", "Cy", "Kim"]);
}

#[test]
fn sort_is_stable_under_reversed_keys() {
    let order = OrderOf::<Employee>::unordered()
        .by(|e: &Employee| e.age)
        .reversed()
        .build()
        .unwrap();
    let mut people = staff();
    order.sort_slice(&mut people);
    let names: Vec<_> = people.iter().map(|e| e.name).collect();
    // ties keep their input order
    assert_eq!(names, vec!["Kim", "Bo", "Ana", "Cy", "Dee"]);
}

#[test]
fn unordered_type_is_reported_at_first_use() {
    init_logger();
    let order = OrderOf::<Employee>::unordered();
    match order.build() {
        Err(CompareError::TypeNotOrderable { type_name }) => {
            assert!(type_name.ends_with("Employee"))
        }
        other => panic!("expected TypeNotOrderable, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn built_comparators_are_shared_across_threads() {
    init_logger();
    let base = OrderOf::<(u8, u8)>::unordered().by(|t: &(u8, u8)| t.0);
    let cmp = Arc::new(base.by(|t: &(u8, u8)| t.1).build().unwrap());

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let cmp = cmp.clone();
            let base = base.clone();
            thread::spawn(move || {
                let derived = base.reversed().build().unwrap();
                assert_eq!(cmp.compare(&(i, 0), &(i, 1)), Ordering::Less);
                assert_eq!(derived.compare(&(i, 0), &(i + 1, 0)), Ordering::Greater);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // deriving never touched the base
    assert_eq!(base.compare(&(1, 0), &(1, 9)), Ok(Ordering::Equal));
}
