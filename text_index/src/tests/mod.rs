#[cfg(test)]
mod test_runs;
