use crate::tensor::Tensor;
use std::fmt;

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shape = self.shape();
        // 池化的输入是4阶张量，元素过多时只展示形状
        if self.size() > 64 {
            writeln!(
                f,
                "<元素过多（共{}个），不展示具体数据>\n形状: {shape:?}",
                self.size()
            )
        } else {
            write!(f, "{:.4}", self.data)?;
            writeln!(f, "\n形状: {shape:?}")
        }
    }
}
