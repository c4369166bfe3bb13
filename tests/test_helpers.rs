//! Literal input/output pairs for the synchronous helpers.

use std::cell::Cell;

use serde_json::{json, Value};

use koolkit::{
    array_move, generate_prime_numbers, get_median_value, get_type_of, get_url_params, group_by,
    group_by_field, once, partition,
};

#[test]
fn test_array_move() {
    let mut array = vec![1, 2, 3, 4, 5];
    array_move(&mut array, 1, 3).unwrap();
    assert_eq!(array, [1, 3, 4, 2, 5]);
}

#[test]
fn test_generate_prime_numbers() {
    let result = generate_prime_numbers(100);
    assert_eq!(
        result,
        [
            2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
            89, 97
        ]
    );
    assert_eq!(result.len(), 25);
}

#[test]
fn test_get_median_value() {
    assert_eq!(get_median_value(&[1.0, 2.0, 3.0]), Some(2.0));
    assert_eq!(get_median_value(&[3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(get_median_value(&[3.0, 1.0, 2.0, 4.0]), Some(2.5));
}

#[test]
fn test_get_type_of() {
    assert_eq!(get_type_of(&json!("hello world")), "String");
    assert_eq!(get_type_of(&json!(1000)), "Number");
    assert_eq!(get_type_of(&json!(true)), "Boolean");
    assert_eq!(get_type_of(&Value::Null), "Null");
    assert_eq!(get_type_of(&json!({})), "Object");
    assert_eq!(get_type_of(&json!([])), "Array");
}

#[test]
fn test_get_url_params() {
    let params = get_url_params("?p=bar&q=hello&q=world&q=foo");
    assert_eq!(
        serde_json::to_value(params).unwrap(),
        json!({"p": "bar", "q": ["hello", "world", "foo"]})
    );
}

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: &'static str,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person { name: "Syn", age: 20 },
        Person { name: "Jack", age: 22 },
        Person { name: "Jane", age: 21 },
        Person { name: "John", age: 22 },
        Person { name: "Min", age: 21 },
    ]
}

#[test]
fn test_group_by() {
    let grouped = group_by(people(), |p| p.age);
    let names: Vec<(u32, Vec<&str>)> = grouped
        .iter()
        .map(|(age, ps)| (*age, ps.iter().map(|p| p.name).collect()))
        .collect();
    assert_eq!(
        names,
        [(20, vec!["Syn"]), (21, vec!["Jane", "Min"]), (22, vec!["Jack", "John"])]
    );
}

#[test]
fn test_group_by_field() {
    let values: Vec<Value> = people()
        .into_iter()
        .map(|p| json!({"name": p.name, "age": p.age}))
        .collect();
    let grouped = group_by_field(values, "age");
    assert_eq!(
        Value::Object(grouped),
        json!({
            "20": [{"name": "Syn", "age": 20}],
            "21": [{"name": "Jane", "age": 21}, {"name": "Min", "age": 21}],
            "22": [{"name": "Jack", "age": 22}, {"name": "John", "age": 22}]
        })
    );
}

#[test]
fn test_once() {
    let calls = Cell::new(0);
    let mut can_only_fire_once = once(|()| calls.set(calls.get() + 1));
    can_only_fire_once.call(());
    assert_eq!(calls.get(), 1);
    can_only_fire_once.call(());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_partition() {
    let split = partition(|num: &i32| num % 2 == 0);
    assert_eq!(split(vec![1, 2, 3, 4, 5, 6]), (vec![1, 3, 5], vec![2, 4, 6]));
}
