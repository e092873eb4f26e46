mod common;
use common::*;
use dc::mach::{DiscardStorage, Runtime};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

fn listing(model: &BTreeMap<String, i32>) -> String {
    model
        .iter()
        .map(|(name, value)| format!("VARIABLE: {}, VALUE: {}\n", name, value))
        .collect()
}

#[test]
fn test_store_load_extremes() {
    let mut r = Runtime::default();
    for value in &[0, 1, -1, i32::MAX, i32::MIN] {
        let out = exec(&mut r, &format!("push {}\nstore n\nload n\nprint\npop\n", value));
        assert_eq!(out, format!("{}\n", value));
        assert!(r.stack().is_empty());
    }
}

#[test]
fn test_remove_leaves_others_reachable() {
    let mut r = Runtime::default();
    exec(
        &mut r,
        "push 1\nstore m\npush 2\nstore c\npush 3\nstore x\npush 4\nstore a\npush 5\nstore e\n",
    );
    exec(&mut r, "remove c\n");
    assert_eq!(exec(&mut r, "load a\nload e\nload x\nload m\nprint\n"), "1\n3\n5\n4\n");
    assert_eq!(exec(&mut r, "load c\n"), "Not found.\n");
}

#[test]
fn test_random_store_remove_matches_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut r = Runtime::default().with_storage(DiscardStorage);
    let mut model = BTreeMap::new();
    for _ in 0..300 {
        let mut program = String::new();
        for _ in 0..3 {
            let name = format!("k{}", rng.gen_range(0..40));
            if rng.gen_bool(0.6) {
                let value: i32 = rng.gen();
                program.push_str(&format!("push {}\nstore {}\n", value, name));
                model.insert(name, value);
            } else {
                program.push_str(&format!("remove {}\n", name));
                model.remove(&name);
            }
        }
        exec(&mut r, &program);
        assert_eq!(exec(&mut r, "list\n"), listing(&model));
        assert_eq!(r.table().len(), model.len());
    }
    for (name, value) in &model {
        assert_eq!(exec(&mut r, &format!("load {}\nprint\npop\n", name)), format!("{}\n", value));
    }
}

#[test]
fn test_remove_everything() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut r = Runtime::default();
    let mut names: Vec<String> = (0..200).map(|n| format!("n{}", n)).collect();
    let program: String = names
        .iter()
        .map(|name| format!("push 1\nstore {}\n", name))
        .collect();
    exec(&mut r, &program);
    while !names.is_empty() {
        let name = names.swap_remove(rng.gen_range(0..names.len()));
        exec(&mut r, &format!("remove {}\n", name));
        assert_eq!(r.table().len(), names.len());
    }
    assert!(r.table().is_empty());
    assert_eq!(exec(&mut r, "list\n"), "");
}

#[test]
fn test_sorted_stores_do_not_exhaust_the_stack() {
    let mut r = Runtime::default();
    for chunk in 0..20 {
        let program: String = (0..500)
            .map(|n| format!("push {}\nstore {:08}\n", n, chunk * 500 + n))
            .collect();
        exec(&mut r, &program);
    }
    assert_eq!(r.table().len(), 10_000);
    let out = exec(&mut r, "list\n");
    assert_eq!(out.lines().count(), 10_000);
    assert_eq!(r.reset(), 10_000);
}
