use pretty_assertions::assert_eq;

use super::*;
use crate::print_handler::buffer_handler;

fn call(builtin: Builtin, args: &[Object]) -> Result<Object, EvalError> {
    builtin.call(args, &buffer_handler())
}

fn ints(values: &[i64]) -> Object {
    Object::array(values.iter().copied().map(Object::Integer).collect())
}

#[test]
fn test_lookup_by_name() {
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::lookup(builtin.name()), Some(builtin));
    }
    assert_eq!(Builtin::lookup("quote"), None);
}

#[test]
fn test_len() {
    assert_eq!(call(Builtin::Len, &[Object::string("")]), Ok(Object::Integer(0)));
    assert_eq!(call(Builtin::Len, &[Object::string("four")]), Ok(Object::Integer(4)));
    assert_eq!(call(Builtin::Len, &[ints(&[1, 2, 3])]), Ok(Object::Integer(3)));
    assert_eq!(
        call(Builtin::Len, &[Object::Integer(1)])
            .map_err(|e| e.to_string()),
        Err("argument to `len` not supported, got INTEGER".to_string())
    );
    assert_eq!(
        call(Builtin::Len, &[Object::string("one"), Object::string("two")])
            .map_err(|e| e.to_string()),
        Err("wrong number of arguments. got=2, want=1".to_string())
    );
}

#[test]
fn test_first_last_rest() {
    let arr = ints(&[1, 2, 3]);
    assert_eq!(call(Builtin::First, &[arr.clone()]), Ok(Object::Integer(1)));
    assert_eq!(call(Builtin::Last, &[arr.clone()]), Ok(Object::Integer(3)));
    assert_eq!(call(Builtin::Rest, &[arr]), Ok(ints(&[2, 3])));

    let empty = ints(&[]);
    assert_eq!(call(Builtin::First, &[empty.clone()]), Ok(Object::Null));
    assert_eq!(call(Builtin::Last, &[empty.clone()]), Ok(Object::Null));
    assert_eq!(call(Builtin::Rest, &[empty]), Ok(Object::Null));

    assert_eq!(
        call(Builtin::First, &[Object::Integer(1)]).map_err(|e| e.to_string()),
        Err("argument to `first` must be ARRAY, got INTEGER".to_string())
    );
}

#[test]
fn test_push_returns_new_array() {
    let arr = ints(&[1]);
    assert_eq!(
        call(Builtin::Push, &[arr.clone(), Object::Integer(2)]),
        Ok(ints(&[1, 2]))
    );
    assert_eq!(arr, ints(&[1]));
    assert_eq!(
        call(Builtin::Push, &[Object::Integer(1), Object::Integer(1)]).map_err(|e| e.to_string()),
        Err("argument to `push` must be ARRAY, got INTEGER".to_string())
    );
}

#[test]
fn test_puts_writes_inspect_forms() {
    let out = buffer_handler();
    let result = Builtin::Puts.call(&[Object::string("hi"), ints(&[1, 2]), Object::Null], &out);
    assert_eq!(result, Ok(Object::Null));
    assert_eq!(out.get_output(), "hi\n[1, 2]\nnull\n");
}
