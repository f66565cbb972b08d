//! Walks a capacity-two stack through overflow and underflow, printing each outcome.

use fraktor_bounded_stack_rs::collections::stack::{StackError, StackHandle, StackStatus};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Reading {
  sensor: &'static str,
  value:  f32,
}

fn main() -> Result<(), StackError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
    .init();

  let first = Reading { sensor: "temp", value: 21.5 };
  let second = Reading { sensor: "humidity", value: 40.0 };
  let third = Reading { sensor: "pressure", value: 1013.2 };

  let mut stack = StackHandle::create(2)?;

  for reading in [&first, &second, &third] {
    let status = StackStatus::of_push(&stack.push(reading));
    println!("push {:<8} -> {status}", reading.sensor);
  }

  match stack.peek_top() {
    | Ok(top) => println!("top      -> {} = {}", top.sensor, top.value),
    | Err(err) => println!("top      -> {}", err.status()),
  }

  loop {
    let popped = stack.pop();
    let status = StackStatus::of(&popped);
    let count = stack.count().unwrap_or(0);
    match popped {
      | Ok(reading) => println!("pop      -> {reading:?} ({status}, count {count})"),
      | Err(_) => {
        println!("pop      -> none ({status}, count {count})");
        break;
      },
    }
  }

  let status = StackStatus::of(&stack.destroy());
  println!("destroy  -> {status}, null handle: {}", stack.is_null());
  Ok(())
}
