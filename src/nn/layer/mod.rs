/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : Layer 模块 - 将池化函数包装为带名称（作用域）的层
 *
 * 层没有可学习参数，只是在函数形式之上附加了名称与日志
 */

mod class_wise_pool;
mod spatial_pool;
mod wildcat_head;

pub use class_wise_pool::ClassWisePool;
pub use spatial_pool::SpatialPool;
pub use wildcat_head::{WildcatHead, WildcatHeadConfig};
