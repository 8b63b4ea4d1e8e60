use crate::entities::{Instance, PieceDemand, Sheet};
use crate::io::ext_repr::{ExtInstance, ExtPiece};
use anyhow::{Context, Result};

/// Imports an instance into the library
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    let sheet = Sheet::try_new(ext_instance.sheet.width, ext_instance.sheet.height)
        .with_context(|| format!("invalid sheet in instance {}", ext_instance.name))?;

    let demands = ext_instance
        .pieces
        .iter()
        .map(import_piece)
        .collect::<Result<Vec<PieceDemand>>>()
        .with_context(|| format!("invalid piece in instance {}", ext_instance.name))?;

    Instance::try_new(ext_instance.name.clone(), sheet, demands)
}

pub fn import_piece(ext_piece: &ExtPiece) -> Result<PieceDemand> {
    let demand = PieceDemand::try_new(
        ext_piece.id.clone(),
        ext_piece.width,
        ext_piece.height,
        ext_piece.quantity as usize,
    )?;
    Ok(match &ext_piece.label {
        Some(label) => demand.with_label(label.clone()),
        None => demand,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANCE: &str = r#"{
        "name": "test",
        "sheet": { "width": 3600, "height": 2500 },
        "pieces": [
            { "id": "1", "width": 1821, "height": 366, "quantity": 2, "label": "door" },
            { "id": "3", "width": 1821, "height": 771.6 }
        ]
    }"#;

    #[test]
    fn quantity_defaults_to_one() {
        let ext: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        let instance = import_instance(&ext).unwrap();

        assert_eq!(instance.sheet, Sheet::try_new(3600.0, 2500.0).unwrap());
        assert_eq!(instance.demands.len(), 2);
        assert_eq!(instance.demands[0].label.as_deref(), Some("door"));
        assert_eq!(instance.demands[1].quantity, 1);
        assert_eq!(instance.total_piece_qty(), 3);
        assert_eq!(instance.pieces().len(), 3);
    }

    #[test]
    fn invalid_instances_are_rejected() {
        let mut ext: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        ext.sheet.width = 0.0;
        assert!(import_instance(&ext).is_err());

        let mut ext: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        ext.pieces[1].quantity = 0;
        assert!(import_instance(&ext).is_err());

        let mut ext: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        ext.pieces[1].id = "1".into();
        assert!(import_instance(&ext).is_err());

        let mut ext: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        ext.pieces[0].height = -366.0;
        assert!(import_instance(&ext).is_err());
    }

    #[test]
    fn instance_survives_export() {
        let ext: ExtInstance = serde_json::from_str(INSTANCE).unwrap();
        let instance = import_instance(&ext).unwrap();
        let exported = crate::io::export::export_instance(&instance);
        let reimported = import_instance(&exported).unwrap();
        assert_eq!(reimported.demands, instance.demands);
    }
}
