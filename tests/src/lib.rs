#[cfg(test)]
mod walkthrough;
