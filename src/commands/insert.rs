use crate::generator::{GenError, PasswordGenerator, PasswordInsert};
use crate::prefstore::PrefStore;

// 主机端的插入目标：写到标准输出，供宿主程序或管道消费
struct StdoutInsert;

impl PasswordInsert for StdoutInsert {
    fn insert_password(&mut self, password: &str) {
        println!("{}", password);
    }
}

pub fn insert_current(store: &PrefStore) -> Result<(), String> {
    let mut generator = PasswordGenerator::new(store)
        .map_err(|e| format!("Failed to initialize generator: {}", e))?;

    let mut target = StdoutInsert;
    match generator.insert_into(&mut target) {
        Ok(true) => Ok(()),
        Ok(false) => {
            eprintln!("No character pool is enabled, nothing to insert.");
            Ok(())
        }
        Err(GenError::EmptyPool(id)) => {
            eprintln!(
                "⚠️ Warning: character pool '{}' is enabled but empty, check the charpool preferences.",
                id.name()
            );
            Ok(())
        }
        Err(e) => Err(format!("Failed to insert password: {}", e)),
    }
}
