use crate::domain::error::DomainError;

/// 印刷サイズ(インチ)と解像度(DPI)の検証済みの組。
/// フォーム文字列からは `from_fields` 経由でのみ生成する。
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl ResizeSpec {
    pub const DEFAULT_DPI: u32 = 300;

    /// 3つのフォームフィールドをまとめて検証する。
    /// どれか1つでも不正なら全体を InvalidResizeSpec として失敗させる (アトミック)。
    /// `dpi` はフィールド自体が無い場合のみ300にフォールバックする。
    pub fn from_fields(
        width_in: Option<&str>,
        height_in: Option<&str>,
        dpi: Option<&str>,
    ) -> Result<Self, DomainError> {
        let width_in = Self::parse_inches(width_in)?;
        let height_in = Self::parse_inches(height_in)?;
        let dpi = match dpi {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| DomainError::InvalidResizeSpec)?,
            None => Self::DEFAULT_DPI,
        };
        if dpi == 0 {
            return Err(DomainError::InvalidResizeSpec);
        }

        Ok(Self {
            width_in,
            height_in,
            dpi,
        })
    }

    fn parse_inches(raw: Option<&str>) -> Result<f64, DomainError> {
        let value: f64 = raw
            .ok_or(DomainError::InvalidResizeSpec)?
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidResizeSpec)?;
        // "inf" や "NaN" も f64 としてはパースできてしまうのでここで弾く
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidResizeSpec);
        }
        Ok(value)
    }

    /// 出力画像のピクセル寸法。小数点以下は切り捨て (ゼロ方向への丸め)。
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        let width_px = (self.width_in * self.dpi as f64) as u32;
        let height_px = (self.height_in * self.dpi as f64) as u32;
        (width_px, height_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_valid_input() {
        let spec = ResizeSpec::from_fields(Some("8.5"), Some("11"), Some("300")).unwrap();
        assert_eq!(spec.width_in, 8.5);
        assert_eq!(spec.height_in, 11.0);
        assert_eq!(spec.dpi, 300);
    }

    #[test]
    fn test_from_fields_dpi_defaults_when_absent() {
        let spec = ResizeSpec::from_fields(Some("1"), Some("1"), None).unwrap();
        assert_eq!(spec.dpi, ResizeSpec::DEFAULT_DPI);
    }

    #[test]
    fn test_from_fields_rejects_missing_required_fields() {
        assert_eq!(
            ResizeSpec::from_fields(None, Some("1"), None),
            Err(DomainError::InvalidResizeSpec)
        );
        assert_eq!(
            ResizeSpec::from_fields(Some("1"), None, None),
            Err(DomainError::InvalidResizeSpec)
        );
    }

    #[test]
    fn test_from_fields_rejects_non_positive_values() {
        assert_eq!(
            ResizeSpec::from_fields(Some("0"), Some("1"), None),
            Err(DomainError::InvalidResizeSpec)
        );
        assert_eq!(
            ResizeSpec::from_fields(Some("1"), Some("-2.5"), None),
            Err(DomainError::InvalidResizeSpec)
        );
        assert_eq!(
            ResizeSpec::from_fields(Some("1"), Some("1"), Some("0")),
            Err(DomainError::InvalidResizeSpec)
        );
        assert_eq!(
            ResizeSpec::from_fields(Some("1"), Some("1"), Some("-300")),
            Err(DomainError::InvalidResizeSpec)
        );
    }

    #[test]
    fn test_from_fields_rejects_unparseable_values() {
        assert_eq!(
            ResizeSpec::from_fields(Some("abc"), Some("1"), None),
            Err(DomainError::InvalidResizeSpec)
        );
        assert_eq!(
            ResizeSpec::from_fields(Some("1"), Some("1"), Some("")),
            Err(DomainError::InvalidResizeSpec)
        );
        assert_eq!(
            ResizeSpec::from_fields(Some("1"), Some("1"), Some("3.5")),
            Err(DomainError::InvalidResizeSpec)
        );
    }

    #[test]
    fn test_from_fields_rejects_non_finite_values() {
        assert_eq!(
            ResizeSpec::from_fields(Some("inf"), Some("1"), None),
            Err(DomainError::InvalidResizeSpec)
        );
        assert_eq!(
            ResizeSpec::from_fields(Some("NaN"), Some("1"), None),
            Err(DomainError::InvalidResizeSpec)
        );
    }

    #[test]
    fn test_from_fields_trims_whitespace() {
        let spec = ResizeSpec::from_fields(Some(" 1.5 "), Some("2"), Some(" 72 ")).unwrap();
        assert_eq!(spec.width_in, 1.5);
        assert_eq!(spec.dpi, 72);
    }

    #[test]
    fn test_pixel_dimensions_truncates_toward_zero() {
        // 1.5in * 99dpi = 148.5 → 148
        let spec = ResizeSpec::from_fields(Some("1.5"), Some("1.5"), Some("99")).unwrap();
        assert_eq!(spec.pixel_dimensions(), (148, 148));

        // レターサイズ
        let spec = ResizeSpec::from_fields(Some("8.5"), Some("11"), Some("300")).unwrap();
        assert_eq!(spec.pixel_dimensions(), (2550, 3300));
    }

    #[test]
    fn test_pixel_dimensions_can_round_down_to_zero() {
        // 0.001in * 300dpi = 0.3 → 0。ここでは許容し、リサイズ側で処理エラーにする
        let spec = ResizeSpec::from_fields(Some("0.001"), Some("1"), None).unwrap();
        assert_eq!(spec.pixel_dimensions().0, 0);
    }
}
